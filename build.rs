use std::fs;

fn main() {
    // A broken bundled template should fail the build, not the first conversion
    let template_path = "templates/default_template.html";
    println!("cargo:rerun-if-changed={}", template_path);

    let content =
        fs::read_to_string(template_path).expect("Failed to read default_template.html");

    // Parse only; rendering needs a real document
    let env = minijinja::Environment::new();
    if let Err(e) = env.template_from_str(&content) {
        panic!("Invalid default_template.html: {}", e);
    }
}
