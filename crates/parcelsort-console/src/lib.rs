//! Colorful console output for classification events.
//!
//! Provides a custom `tracing` layer that formats parcelsort events with colors.
//!
//! ## Log Levels
//!
//! - **WARN**: Input refused by the form or the classifier
//! - **INFO**: Catalog lifecycle (sample start/end)
//! - **DEBUG**: Each classification with its intermediate values

use std::io::{self, Write};
use std::sync::OnceLock;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use parcelsort_config::ConsoleConfig;
use parcelsort_core::Category;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_DIRECTIVES: &str = "parcelsort=info,parcelsort_core=debug";

/// Initializes console output with the default settings.
///
/// Safe to call multiple times - only the first call has effect.
pub fn init() {
    init_with(&ConsoleConfig::default());
}

/// Initializes console output from a [`ConsoleConfig`].
///
/// `RUST_LOG` wins over the configured filter, which wins over the defaults.
/// Safe to call multiple times - only the first call has effect.
pub fn init_with(config: &ConsoleConfig) {
    INIT.get_or_init(|| {
        if config.banner {
            print_banner();
        }

        let directives = config.filter.as_deref().unwrap_or(DEFAULT_DIRECTIVES);
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::builder().parse_lossy(directives));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SorterConsoleLayer)
            .try_init();
    });
}

fn print_banner() {
    let banner = r#"
                           _                _
 _ __   __ _ _ __ ___ ___| |___  ___  _ __| |_
| '_ \ / _` | '__/ __/ _ \ / __|/ _ \| '__| __|
| |_) | (_| | | | (_|  __/ \__ \ (_) | |  | |_
| .__/ \__,_|_|  \___\___|_|___/\___/|_|   \__|
|_|
"#;

    let version_line = format!("          v{} - Package Handling Classifier\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats classification events with colors.
pub struct SorterConsoleLayer;

impl<S: Subscriber> Layer<S> for SorterConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let Some(visitor) = visit_event(event) else {
            return;
        };

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

/// Collects the fields of a parcelsort event; events from other targets yield `None`.
pub fn visit_event(event: &Event<'_>) -> Option<EventVisitor> {
    if !event.metadata().target().starts_with("parcelsort") {
        return None;
    }

    let mut visitor = EventVisitor::default();
    event.record(&mut visitor);
    Some(visitor)
}

/// Fields collected from one parcelsort event.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EventVisitor {
    pub event: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub error: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub length: Option<f64>,
    pub mass: Option<f64>,
    pub volume: Option<f64>,
    pub is_bulky: Option<bool>,
    pub is_heavy: Option<bool>,
    pub matched: Option<bool>,
    pub index: Option<u64>,
    pub total: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        let s = s.trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "description" => self.description = Some(s),
            "category" => self.category = Some(s),
            "error" => self.error = Some(s),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "description" => self.description = Some(value.to_string()),
            "category" => self.category = Some(value.to_string()),
            "error" => self.error = Some(value.to_string()),
            _ => {}
        }
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "width" => self.width = Some(value),
            "height" => self.height = Some(value),
            "length" => self.length = Some(value),
            "mass" => self.mass = Some(value),
            "volume" => self.volume = Some(value),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "index" => self.index = Some(value),
            "total" => self.total = Some(value),
            _ => self.record_f64(field, value as f64),
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_f64(field, value as f64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        match field.name() {
            "is_bulky" => self.is_bulky = Some(value),
            "is_heavy" => self.is_heavy = Some(value),
            "matched" => self.matched = Some(value),
            _ => {}
        }
    }
}

/// Renders one event, or an empty string for events this layer ignores.
pub fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "classified" => format_classified(v),
        "sample_start" => format_sample_start(v),
        "sample_end" => format_sample_end(v),
        "rejected_input" => format_rejected_input(v),
        _ => String::new(),
    }
}

fn format_classified(v: &EventVisitor) -> String {
    let flag = |set: Option<bool>, name: &str| {
        if set.unwrap_or(false) {
            name.bright_yellow().to_string()
        } else {
            name.bright_black().to_string()
        }
    };

    format!(
        "  {} {} × {} × {} cm │ {} kg │ {} cm³ │ {} {} │ {}",
        "◆".bright_blue(),
        format_number(v.width.unwrap_or(0.0)),
        format_number(v.height.unwrap_or(0.0)),
        format_number(v.length.unwrap_or(0.0)),
        format_number(v.mass.unwrap_or(0.0)),
        format_volume(v.volume.unwrap_or(0.0)).white(),
        flag(v.is_bulky, "bulky"),
        flag(v.is_heavy, "heavy"),
        format_category(v.category.as_deref().unwrap_or("N/A")),
    )
}

fn format_sample_start(v: &EventVisitor) -> String {
    let description = v.description.as_deref().unwrap_or("Unnamed");
    let position = match (v.index, v.total) {
        (Some(i), Some(t)) => format!("[{}/{}]", i, t),
        _ => String::new(),
    };

    format!(
        "{} {} {}",
        "▶".bright_green().bold(),
        position.bright_black(),
        description.white().bold()
    )
}

fn format_sample_end(v: &EventVisitor) -> String {
    let description = v.description.as_deref().unwrap_or("Unnamed");

    let result = match (&v.category, &v.error) {
        (Some(category), _) => format_category(category),
        (None, Some(error)) => error.bright_red().to_string(),
        (None, None) => "N/A".white().to_string(),
    };

    let check = match v.matched {
        Some(true) => format!(" {}", "✓".bright_green()),
        Some(false) => format!(" {}", "✗ unexpected".bright_red()),
        None => String::new(),
    };

    format!(
        "{} {} → {}{}",
        "■".bright_cyan().bold(),
        description.white(),
        result,
        check
    )
}

fn format_rejected_input(v: &EventVisitor) -> String {
    format!(
        "{} {}",
        "⚠".bright_red().bold(),
        v.error.as_deref().unwrap_or("invalid input").bright_red()
    )
}

/// Colors a category label by its severity. Unknown labels are left plain.
pub fn format_category(label: &str) -> String {
    match label.parse::<Category>() {
        Ok(Category::Standard) => label.bright_green().bold().to_string(),
        Ok(Category::Special) => label.bright_yellow().bold().to_string(),
        Ok(Category::Rejected) => label.bright_red().bold().to_string(),
        Err(_) => label.white().to_string(),
    }
}

/// Formats a volume with thousands separators, rounding to whole cm³.
pub fn format_volume(volume: f64) -> String {
    if !volume.is_finite() || volume < 0.0 || volume >= u64::MAX as f64 {
        return format!("{}", volume);
    }
    (volume.round() as u64).to_formatted_string(&Locale::en)
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}
