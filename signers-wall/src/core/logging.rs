pub use log::{debug, error, info, trace, warn};

use log::LevelFilter;

/// Crates whose records are shown by default. Everything else (gloo,
/// serde_yml, ...) stays at warn unless `RUST_LOG` says otherwise.
const OWN_CRATES: [&str; 2] = ["signers_wall", "signers_page"];

pub fn init_logger() {
    init_logger_at(LevelFilter::Info);
}

/// Builds the default filter: `level` for this workspace, warn elsewhere.
#[cfg(not(target_arch = "wasm32"))]
pub fn default_filter(level: LevelFilter) -> String {
    let level = level.to_string().to_lowercase();
    let mut filter = String::from("warn");
    for name in OWN_CRATES {
        filter.push_str(&format!(",{}={}", name, level));
    }
    filter
}

/// Drops this workspace's crate prefix so lines read `[INFO][runtime::app]`.
pub fn short_target(module_path: &str) -> &str {
    OWN_CRATES
        .iter()
        .find_map(|name| {
            module_path
                .strip_prefix(*name)
                .and_then(|rest| rest.strip_prefix("::"))
        })
        .unwrap_or(module_path)
}

/// Logs to stderr so `signers-page` output can be piped.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logger_at(level: LevelFilter) {
    use env_logger::{Builder, Env};
    use std::io::Write;
    use termcolor::{Color, ColorSpec, WriteColor};

    let mut builder =
        Builder::from_env(Env::default().default_filter_or(default_filter(level)));

    builder.format(|_buf, record| {
        let writer =
            termcolor::BufferWriter::stderr(termcolor::ColorChoice::Auto);
        let mut buffer = writer.buffer();
        let mut color = ColorSpec::new();

        color.set_fg(Some(match record.level() {
            log::Level::Trace => Color::Cyan,
            log::Level::Debug => Color::Blue,
            log::Level::Info => Color::Green,
            log::Level::Warn => Color::Yellow,
            log::Level::Error => Color::Red,
        }));

        buffer.set_color(&color)?;
        let target = short_target(record.module_path().unwrap_or("<unknown>"));
        write!(buffer, "[{}][{}]", record.level(), target)?;
        buffer.reset()?;
        writeln!(buffer, " {}", record.args())?;
        writer.print(&buffer)?;
        Ok(())
    });

    let _ = builder.try_init();
}

#[cfg(target_arch = "wasm32")]
pub fn init_logger_at(level: LevelFilter) {
    if log::set_logger(&CONSOLE_LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// Forwards records to the browser console at the matching level so they
/// show up with the right severity in devtools.
#[cfg(target_arch = "wasm32")]
struct ConsoleLogger;

#[cfg(target_arch = "wasm32")]
static CONSOLE_LOGGER: ConsoleLogger = ConsoleLogger;

#[cfg(target_arch = "wasm32")]
impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let target = short_target(record.module_path().unwrap_or("<unknown>"));
        let line = format!("[{}][{}] {}", record.level(), target, record.args());
        let line = wasm_bindgen::JsValue::from_str(&line);

        match record.level() {
            log::Level::Error => web_sys::console::error_1(&line),
            log::Level::Warn => web_sys::console::warn_1(&line),
            log::Level::Info => web_sys::console::info_1(&line),
            log::Level::Debug | log::Level::Trace => {
                web_sys::console::debug_1(&line)
            }
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_quiets_dependencies() {
        assert_eq!(
            default_filter(LevelFilter::Debug),
            "warn,signers_wall=debug,signers_page=debug"
        );
    }

    #[test]
    fn short_target_strips_only_own_crates() {
        assert_eq!(short_target("signers_wall::runtime::app"), "runtime::app");
        assert_eq!(short_target("signers_page::page"), "page");
        assert_eq!(short_target("signers_wall"), "signers_wall");
        assert_eq!(short_target("signers_wallpaper::x"), "signers_wallpaper::x");
        assert_eq!(short_target("gloo_net::http"), "gloo_net::http");
    }
}
