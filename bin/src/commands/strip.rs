use unistyle_text_transform::strip;

pub fn handle(input: &str) -> String {
    strip(input)
}
