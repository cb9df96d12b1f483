use web_sys::UrlSearchParams;

use ticket_form_core::FormConfig;

pub(crate) const MAX_UPLOAD_QUERY_PARAM: &str = "max_upload_kb";

pub(crate) fn load_form_config() -> FormConfig {
    let mut config = FormConfig::default();
    if let Some(raw) = option_env!("TICKET_FORM_MAX_UPLOAD_KB")
        .or(option_env!("TRUNK_PUBLIC_TICKET_FORM_MAX_UPLOAD_KB"))
    {
        config = apply_override(config, raw, "build env");
    }
    if let Some(raw) = query_override() {
        config = apply_override(config, &raw, "query");
    }
    config
}

fn apply_override(config: FormConfig, raw: &str, source: &str) -> FormConfig {
    match config.with_max_upload_override(raw) {
        Ok(next) => {
            gloo::console::log!("upload limit override", source, next.max_upload_kb);
            next
        }
        Err(err) => {
            gloo::console::warn!("ignoring upload limit override", source, err.to_string());
            config
        }
    }
}

fn query_override() -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    let params = UrlSearchParams::new_with_str(&search).ok()?;
    params.get(MAX_UPLOAD_QUERY_PARAM)
}
