// src/config.rs

pub const DEFAULT_PILLARS_URL: &str = "assets/data/pillars.json";
pub const DEFAULT_FRAMEWORKS_URL: &str = "assets/data/frameworks.json";
/// Viewport width (in points) below which the framework list lives in a drawer.
pub const DEFAULT_NARROW_BREAKPOINT: f32 = 1024.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ContentSource {
    /// Fetch the JSON resources from `pillars_url` / `frameworks_url`.
    #[default]
    Remote,
    /// Use the copies compiled into the binary.
    Embedded,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub pillars_url: String,
    pub frameworks_url: String,
    pub source: ContentSource,
    pub narrow_breakpoint: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pillars_url: DEFAULT_PILLARS_URL.to_string(),
            frameworks_url: DEFAULT_FRAMEWORKS_URL.to_string(),
            source: ContentSource::Remote,
            narrow_breakpoint: DEFAULT_NARROW_BREAKPOINT,
        }
    }
}

/// Raw overrides before they are merged onto the defaults.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigOverrides {
    pub pillars_url: Option<String>,
    pub frameworks_url: Option<String>,
    pub embedded: Option<bool>,
}

impl ConfigOverrides {
    /// Fills in whatever `self` leaves unset from `fallback`.
    pub fn or(self, fallback: ConfigOverrides) -> ConfigOverrides {
        ConfigOverrides {
            pillars_url: self.pillars_url.or(fallback.pillars_url),
            frameworks_url: self.frameworks_url.or(fallback.frameworks_url),
            embedded: self.embedded.or(fallback.embedded),
        }
    }
}

impl AppConfig {
    pub fn from_overrides(overrides: ConfigOverrides) -> Self {
        let defaults = Self::default();
        Self {
            pillars_url: overrides.pillars_url.unwrap_or(defaults.pillars_url),
            frameworks_url: overrides.frameworks_url.unwrap_or(defaults.frameworks_url),
            source: if overrides.embedded.unwrap_or(false) {
                ContentSource::Embedded
            } else {
                ContentSource::Remote
            },
            narrow_breakpoint: defaults.narrow_breakpoint,
        }
    }

    /// Resolves the configuration for the current platform.
    pub fn resolve() -> Self {
        let config = Self::from_overrides(platform_overrides());
        log::info!(
            "content source {:?}: pillars={} frameworks={}",
            config.source,
            config.pillars_url,
            config.frameworks_url
        );
        config
    }
}

fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Reads overrides from `key=value` pairs of a query string (leading `?` optional).
pub fn overrides_from_query(search: &str) -> ConfigOverrides {
    let query = search.strip_prefix('?').unwrap_or(search);
    let mut overrides = ConfigOverrides::default();

    for pair in query.split('&') {
        let (key, value) = match pair.split_once('=') {
            Some((k, v)) => (k, v),
            None => (pair, ""),
        };
        let value = decode_query_value(value);
        match key {
            "pillars_url" => overrides.pillars_url = normalize_value(&value),
            "frameworks_url" => overrides.frameworks_url = normalize_value(&value),
            "embedded" => overrides.embedded = parse_flag(&value).or(Some(true)),
            _ => {}
        }
    }

    overrides
}

#[cfg(target_arch = "wasm32")]
fn decode_query_value(value: &str) -> String {
    js_sys::decode_uri_component(value)
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_else(|| value.to_string())
}

/// Percent-decodes like `decodeURIComponent`: `+` stays as is, and a malformed
/// escape or non-UTF-8 result leaves the whole value untouched.
#[cfg(not(target_arch = "wasm32"))]
fn decode_query_value(value: &str) -> String {
    fn hex(b: u8) -> Option<u8> {
        match b {
            b'0'..=b'9' => Some(b - b'0'),
            b'a'..=b'f' => Some(b - b'a' + 10),
            b'A'..=b'F' => Some(b - b'A' + 10),
            _ => None,
        }
    }

    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'%' {
            out.push(bytes[i]);
            i += 1;
            continue;
        }
        let hi = bytes.get(i + 1).copied().and_then(hex);
        let lo = bytes.get(i + 2).copied().and_then(hex);
        let escaped = hi.zip(lo);
        match escaped {
            Some((hi, lo)) => out.push((hi << 4) | lo),
            None => return value.to_string(),
        }
        i += 3;
    }
    String::from_utf8(out).unwrap_or_else(|_| value.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn platform_overrides() -> ConfigOverrides {
    overrides_from_env(|key| std::env::var(key).ok())
}

#[cfg(not(target_arch = "wasm32"))]
fn overrides_from_env(var: impl Fn(&str) -> Option<String>) -> ConfigOverrides {
    ConfigOverrides {
        pillars_url: var("ALIGNMENT_QUIZ_PILLARS_URL").as_deref().and_then(normalize_value),
        frameworks_url: var("ALIGNMENT_QUIZ_FRAMEWORKS_URL")
            .as_deref()
            .and_then(normalize_value),
        embedded: var("ALIGNMENT_QUIZ_EMBEDDED").as_deref().and_then(parse_flag),
    }
}

#[cfg(target_arch = "wasm32")]
fn platform_overrides() -> ConfigOverrides {
    overrides_from_build_env().or(overrides_from_querystring())
}

#[cfg(target_arch = "wasm32")]
fn overrides_from_build_env() -> ConfigOverrides {
    ConfigOverrides {
        pillars_url: option_env!("ALIGNMENT_QUIZ_PILLARS_URL").and_then(normalize_value),
        frameworks_url: option_env!("ALIGNMENT_QUIZ_FRAMEWORKS_URL").and_then(normalize_value),
        embedded: option_env!("ALIGNMENT_QUIZ_EMBEDDED").and_then(parse_flag),
    }
}

#[cfg(target_arch = "wasm32")]
fn overrides_from_querystring() -> ConfigOverrides {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .map(|search| overrides_from_query(&search))
        .unwrap_or_default()
}
