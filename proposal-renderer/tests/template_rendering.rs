use std::path::{Path, PathBuf};

use proposal_core::{DerivedContext, ProposalAnswers};
use proposal_renderer::{Renderer, TemplateSource, TemplateVars, RESERVED_SCRIPT};

const PLACEHOLDER_OPEN: &str = "{{";

fn vars(name: &str, nickname: &str, fullname: &str, email: &str) -> TemplateVars {
    let answers = ProposalAnswers::new(name, nickname, fullname, email, true).expect("answers");
    let derived = DerivedContext::derive(&answers, Path::new("/work"));
    TemplateVars::new(&answers, &derived)
}

fn source_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src").join("templates")
}

fn render_embedded(vars: &TemplateVars) -> Vec<(String, String)> {
    let files = TemplateSource::Embedded.select(true).expect("select");
    let renderer = Renderer::new(&files).expect("renderer");
    let ctx = vars.to_tera_context().expect("ctx");
    files
        .iter()
        .map(|f| {
            let text = renderer
                .render(f, &ctx)
                .unwrap_or_else(|e| panic!("render failed for {}: {e}", f.base_name));
            (f.base_name.clone(), text)
        })
        .collect()
}

#[test]
fn every_rendered_file_has_placeholders_resolved() {
    let v = vars("Array Grouping", "octocat", "Mona Lisa", "mona@example.com");
    for (name, text) in render_embedded(&v) {
        if name == RESERVED_SCRIPT {
            continue;
        }
        assert!(
            !text.contains(PLACEHOLDER_OPEN),
            "{name} still contains a placeholder:\n{text}"
        );
    }
}

#[test]
fn email_placeholder_resolves_to_literal_email() {
    let v = vars("Array Grouping", "octocat", "Mona Lisa", "someone+tag@example.org");
    let rendered = render_embedded(&v);
    let readme = &rendered.iter().find(|(n, _)| n == "README.md").expect("readme").1;
    assert!(readme.contains("Mona Lisa <someone+tag@example.org>"), "{readme}");
    assert!(readme.starts_with("# Array Grouping\n"));
    assert!(readme.contains("https://github.com/octocat/proposal-array-grouping"));
}

#[test]
fn deploy_script_is_byte_identical_for_any_values() {
    let on_disk = std::fs::read(source_dir().join("additional").join(RESERVED_SCRIPT))
        .expect("read deploy.sh");
    for v in [
        vars("A", "b", "c", "d@e"),
        vars("Some {{ weird }} name", "{% raw %}", "${#X}", "x@y.z"),
    ] {
        let rendered = render_embedded(&v);
        let script = &rendered.iter().find(|(n, _)| n == RESERVED_SCRIPT).expect("script").1;
        assert_eq!(script.as_bytes(), on_disk.as_slice());
    }
}

#[test]
fn package_json_is_valid_json() {
    let v = vars("Array Grouping", "octocat", "Mona Lisa", "mona@example.com");
    let rendered = render_embedded(&v);
    let pkg = &rendered.iter().find(|(n, _)| n == "package.json").expect("package.json").1;
    let json: serde_json::Value = serde_json::from_str(pkg)
        .unwrap_or_else(|e| panic!("package.json rendered invalid JSON.\nError: {e}\nContent:\n{pkg}"));
    assert_eq!(json["name"], "proposal-array-grouping");
    assert_eq!(json["author"], "Mona Lisa <mona@example.com>");
}

#[test]
fn directory_source_renders_without_touching_sources() {
    let root = tempfile::TempDir::new().expect("tempdir");
    let base = root.path().join("base");
    std::fs::create_dir_all(&base).unwrap();
    let original = "Hello {{ nickname }} <{{ email }}>\n";
    std::fs::write(base.join("HELLO.md"), original).unwrap();

    let source = TemplateSource::Directory(root.path().to_path_buf());
    let files = source.select(false).unwrap();
    let renderer = Renderer::new(&files).unwrap();
    let v = vars("Idea", "octocat", "Mona", "m@x.org");
    let out = renderer.render(&files[0], &v.to_tera_context().unwrap()).unwrap();

    assert_eq!(out, "Hello octocat <m@x.org>\n");
    assert_eq!(std::fs::read_to_string(base.join("HELLO.md")).unwrap(), original);
}
