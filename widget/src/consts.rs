//! Shared string constants for the widget crate.

// ── Namespaces ──────────────────────────────────────────────────

/// XHTML namespace URI.
pub const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

/// Namespace URI of the widget's configuration block.
pub const PARAMS_NS: &str = "/2011/02/19/bash_c_ui/params";

/// Reserved `xml:` prefix namespace URI.
pub const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

// ── Configuration block ─────────────────────────────────────────

/// Local name of the configuration block element in `<head>`.
pub const PARAMS_BLOCK: &str = "bash_c_params";

/// Entry carrying the CGI endpoint URL in its `value` attribute.
pub const PARAM_CGI_BIN_URL: &str = "bash_c_cgi_bin_url";

/// Entry requesting a widget mount; names the placeholder in `target_id`.
pub const PARAM_UI: &str = "bash_c_ui";

/// Attribute holding the endpoint URL.
pub const ATTR_VALUE: &str = "value";

/// Attribute holding the placeholder element id.
pub const ATTR_TARGET_ID: &str = "target_id";

// ── Page contract ───────────────────────────────────────────────

/// Id of the optional diagnostic sink element.
pub const DEBUG_LOG_ID: &str = "debug_log";

/// Prefix written before every diagnostic message.
pub const DEBUG_LOG_PREFIX: &str = "⚠ Debug Log: ";

// ── Widget labels ───────────────────────────────────────────────

/// Widget title text.
pub const TITLE: &str = "bash -c <...> # Web Shell";

pub const BUTTON_CLEAR_HISTORY: &str = "Clear history";
pub const BUTTON_CHANGE_CGI: &str = "Change CGI";
pub const BUTTON_ABOUT: &str = "About";

pub const LABEL_DIRECTORY: &str = "Directory:";
pub const LABEL_COMMAND: &str = "$ bash -c";

/// Visible rows of the history list.
pub const HISTORY_ROWS: &str = "12";
