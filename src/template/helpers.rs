//! Helper functions available to report templates
//!
//! Each helper is a pure string transformation. The set a renderer gets is
//! chosen explicitly through [`ReportHelper`] when it is constructed.

use handlebars::{Handlebars, HelperDef, JsonValue, handlebars_helper};

use crate::diff::fenced_diff;

const ICON_PRESENT: &str = ":white_check_mark:";
const ICON_ABSENT: &str = ":red_circle:";

/// Named template helper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportHelper {
    /// `{{lower text}}`
    Lower,
    /// `{{replace text from to}}`
    Replace,
    /// `{{code text}}`
    Code,
    /// `{{yesno flag}}`
    YesNo,
    /// `{{indent width text}}`
    Indent,
    /// `{{diff source target}}`
    Diff,
}

impl ReportHelper {
    /// Every helper, in registration order
    pub const ALL: [ReportHelper; 6] = [
        ReportHelper::Lower,
        ReportHelper::Replace,
        ReportHelper::Code,
        ReportHelper::YesNo,
        ReportHelper::Indent,
        ReportHelper::Diff,
    ];

    /// Name the helper is registered under
    pub fn name(self) -> &'static str {
        match self {
            ReportHelper::Lower => "lower",
            ReportHelper::Replace => "replace",
            ReportHelper::Code => "code",
            ReportHelper::YesNo => "yesno",
            ReportHelper::Indent => "indent",
            ReportHelper::Diff => "diff",
        }
    }

    fn definition(self) -> Box<dyn HelperDef + Send + Sync> {
        match self {
            ReportHelper::Lower => Box::new(lower_helper),
            ReportHelper::Replace => Box::new(replace_helper),
            ReportHelper::Code => Box::new(code_helper),
            ReportHelper::YesNo => Box::new(yesno_helper),
            ReportHelper::Indent => Box::new(indent_helper),
            ReportHelper::Diff => Box::new(diff_helper),
        }
    }
}

/// Register the given helpers into a registry
pub fn register_helpers(handlebars: &mut Handlebars<'_>, helpers: &[ReportHelper]) {
    for helper in helpers {
        handlebars.register_helper(helper.name(), helper.definition());
    }
}

/// Wrap non-empty text in backticks, leave empty text alone
pub fn code_span(text: &str) -> String {
    if text.is_empty() {
        String::new()
    } else {
        format!("`{}`", text)
    }
}

/// Presence icon for a boolean
pub fn yes_no_icon(flag: bool) -> &'static str {
    if flag { ICON_PRESENT } else { ICON_ABSENT }
}

/// Prefix every line of `text` with `width` spaces
pub fn indent_lines(width: usize, text: &str) -> String {
    let pad = " ".repeat(width);
    format!("{}{}", pad, text.replace('\n', &format!("\n{}", pad)))
}

handlebars_helper!(lower_helper: |text: str| text.to_lowercase());
handlebars_helper!(replace_helper: |text: str, from: str, to: str| text.replace(from, to));
handlebars_helper!(code_helper: |value: Json| code_span(as_text(value)));
handlebars_helper!(yesno_helper: |flag: bool| yes_no_icon(flag));
handlebars_helper!(indent_helper: |width: u64, text: str| indent_lines(width as usize, text));
handlebars_helper!(diff_helper: |source: str, target: str| fenced_diff(source, target));

// Absent optional fields reach helpers as null
fn as_text(value: &JsonValue) -> &str {
    value.as_str().unwrap_or_default()
}
