use unistyle_text_transform::{clusters, Codec};

/// One line per position: the text as written, its base character, its styles.
pub fn handle(codec: &Codec, input: &str) -> String {
    let mut out = String::new();
    for cluster in clusters(input) {
        let mut written = String::new();
        cluster.push_to(&mut written);
        let record = codec.decode(cluster);
        let styles = if record.styles.is_empty() {
            "-".to_string()
        } else {
            record.styles.to_string()
        };
        out.push_str(&format!(
            "{}\t{}\t{}\n",
            written.escape_debug(),
            record.base.escape_debug(),
            styles
        ));
    }
    out
}
