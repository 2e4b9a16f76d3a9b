use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_command(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_md-slides"))
        .current_dir(dir)
        .args(args)
        .env_remove("LEVEL_ONE_SIZE")
        .env_remove("LEVEL_TWO_SIZE")
        .env_remove("LEVEL_THREE_SIZE")
        .env_remove("BOLD_LEVEL_ONE")
        .env_remove("ASPECT_RATIO")
        .output()
        .expect("Failed to execute command")
}

fn read_slide(pptx: &Path, number: usize) -> String {
    use std::io::Read;

    let file = fs::File::open(pptx).expect("Failed to open PPTX file");
    let mut archive = zip::ZipArchive::new(file).expect("Failed to read PPTX as ZIP");
    let mut slide = archive
        .by_name(&format!("ppt/slides/slide{}.xml", number))
        .expect("Missing slide");
    let mut xml = String::new();
    slide.read_to_string(&mut xml).expect("Slide is not UTF-8");
    xml
}

#[test]
fn test_convert_single_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let temp_path = temp_dir.path();

    let markdown_path = temp_path.join("deck.md");
    fs::write(&markdown_path, "Slide 1: Intro\n- Point A\n  - Sub A1\n")
        .expect("Failed to write markdown file");
    let output_path = temp_path.join("deck.pptx");

    let output = run_command(
        temp_path,
        &[
            "-f",
            markdown_path.to_str().unwrap(),
            "-o",
            output_path.to_str().unwrap(),
        ],
    );

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(output_path.exists(), "PPTX file was not created");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains(&format!("Presentation saved as {}", output_path.display())),
        "Missing confirmation: {}",
        stdout
    );

    let slide = read_slide(&output_path, 1);
    assert!(slide.contains("<a:t>Intro</a:t>"));
    assert!(slide.contains("<a:t>Point A</a:t>"));
    assert!(slide.contains(r#"<a:pPr lvl="1"/>"#));
}

#[test]
fn test_default_paths() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let temp_path = temp_dir.path();
    fs::create_dir(temp_path.join("input")).expect("Failed to create input dir");
    fs::write(temp_path.join("input/slides.md"), "Slide 1: Defaults\n- ok\n")
        .expect("Failed to write markdown file");

    let output = run_command(temp_path, &[]);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(temp_path.join("output/slides.pptx").exists());
}

#[test]
fn test_missing_input_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let output = run_command(temp_dir.path(), &["-f", "nope.md", "-o", "out.pptx"]);

    assert!(!output.status.success(), "Command should fail");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "Unexpected stderr: {}", stderr);
    assert!(stderr.contains("nope.md"));
    assert!(!temp_dir.path().join("out.pptx").exists());
}

#[test]
fn test_recursive_mode() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let temp_path = temp_dir.path();
    let input_dir = temp_path.join("decks");
    fs::create_dir(&input_dir).expect("Failed to create input dir");
    for name in ["alpha", "beta", "gamma"] {
        fs::write(
            input_dir.join(format!("{}.md", name)),
            format!("Slide 1: {}\n- body\n", name),
        )
        .expect("Failed to write markdown file");
    }
    let output_dir = temp_path.join("built");

    let output = run_command(
        temp_path,
        &[
            "-r",
            "-f",
            input_dir.to_str().unwrap(),
            "-o",
            output_dir.to_str().unwrap(),
        ],
    );

    assert!(output.status.success(), "Command failed: {:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("Presentation saved as").count(), 3);

    for name in ["alpha", "beta", "gamma"] {
        let pptx = output_dir.join(format!("{}.pptx", name));
        assert!(pptx.exists(), "Missing {:?}", pptx);
        assert!(read_slide(&pptx, 1).contains(&format!("<a:t>{}</a:t>", name)));
    }
}

#[test]
fn test_font_size_flags() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let temp_path = temp_dir.path();
    fs::write(temp_path.join("s.md"), "Slide 1: T\n- top\n  - second\n")
        .expect("Failed to write markdown file");

    let output = run_command(
        temp_path,
        &[
            "-f",
            "s.md",
            "-o",
            "s.pptx",
            "--level-one-size",
            "28",
            "--bold-level-one",
            "false",
        ],
    );
    assert!(output.status.success(), "Command failed: {:?}", output);

    let slide = read_slide(&temp_path.join("s.pptx"), 1);
    assert!(slide.contains(r#"sz="2800" dirty="0"></a:rPr><a:t>top</a:t>"#));
    assert!(slide.contains(r#"sz="1600" dirty="0"></a:rPr><a:t>second</a:t>"#));
}

#[test]
fn test_font_size_flag_out_of_range_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let temp_path = temp_dir.path();
    fs::write(temp_path.join("s.md"), "Slide 1: T\n- top\n")
        .expect("Failed to write markdown file");

    let output = run_command(
        temp_path,
        &["-f", "s.md", "-o", "s.pptx", "--level-one-size", "50000000"],
    );

    assert!(!output.status.success(), "Command should fail");
    assert!(!temp_path.join("s.pptx").exists());
}

#[test]
fn test_font_size_from_environment() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let temp_path = temp_dir.path();
    fs::write(temp_path.join("s.md"), "Slide 1: T\n  - second\n")
        .expect("Failed to write markdown file");

    let output = Command::new(env!("CARGO_BIN_EXE_md-slides"))
        .current_dir(temp_path)
        .args(["-f", "s.md", "-o", "s.pptx"])
        .env("LEVEL_TWO_SIZE", "22")
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success(), "Command failed: {:?}", output);

    let slide = read_slide(&temp_path.join("s.pptx"), 1);
    assert!(slide.contains(r#"sz="2200""#));
}
