use indicatif::ProgressStyle;

const SPINNER_TEMPLATE: &str = "{spinner:.cyan} [{elapsed_precise}] {msg} {pos:>7} rows";

pub fn progress_spinner_style() -> ProgressStyle {
    ProgressStyle::with_template(SPINNER_TEMPLATE).unwrap_or_else(|_| ProgressStyle::default_spinner())
}
