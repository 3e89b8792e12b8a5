use indicatif::ProgressStyle;

const STAGE_TEMPLATE: &str = "{spinner} {prefix:.bold} {wide_msg}";
const DONE_TEMPLATE: &str = "{prefix:.bold} {wide_msg}";

pub struct ProgressStyleTemplate;

impl ProgressStyleTemplate {
    /// Spinner for a stage that is still talking to the API.
    pub fn stage() -> ProgressStyle {
        ProgressStyle::with_template(STAGE_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Static line left behind once a stage completed.
    pub fn done() -> ProgressStyle {
        ProgressStyle::with_template(DONE_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}
