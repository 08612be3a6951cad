//! Colorful console output for experiment lifecycle events.
//!
//! Provides a custom `tracing` layer that formats benchmark events with colors.
//! Log lines go to stderr so the progress table and analysis on stdout stay
//! clean when redirected.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (experiment start/end, files written, plotting)
//! - **DEBUG**: One line per measured size

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

const VERSION: &str = env!("CARGO_PKG_VERSION");
const TARGET: &str = "running_times_bench";

/// Initializes console logging.
///
/// Safe to call multiple times - only the first call has effect. `verbose`
/// lowers the default level to DEBUG; `RUST_LOG` still takes precedence.
pub fn init(verbose: bool) {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);
        print_banner();

        let level = if verbose { "debug" } else { "info" };
        let directive: Directive = format!("{}={}", TARGET, level)
            .parse()
            .unwrap_or_else(|_| LevelFilter::INFO.into());
        let filter = EnvFilter::builder()
            .with_default_directive(directive)
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(BenchConsoleLayer)
            .try_init();
    });
}

fn elapsed_secs() -> f64 {
    EPOCH
        .get()
        .map(|epoch| epoch.elapsed().as_secs_f64())
        .unwrap_or(0.0)
}

fn print_banner() {
    let banner = r#"
 ___            _           _____ _
| _ \_  _ _ _  _ _ (_)_ _  __ |_   _(_)_ __  ___ ___
|   / || | ' \| ' \| | ' \/ _` || | | | '  \/ -_|_-<
|_|_\\_,_|_||_|_||_|_|_||_\__, ||_| |_|_|_|_\___/__/
                          |___/
"#;

    let version_line = format!("          v{} - Growth Rates, Measured\n", VERSION);

    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "{}", banner.bright_cyan());
    let _ = writeln!(stderr, "{}", version_line.bright_white().bold());
    let _ = stderr.flush();
}

/// A tracing layer that formats experiment events with colors.
pub struct BenchConsoleLayer;

impl<S: Subscriber> Layer<S> for BenchConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with(TARGET) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    experiment: Option<String>,
    unit: Option<String>,
    image: Option<String>,
    program: Option<String>,
    reason: Option<String>,
    data: Option<String>,
    script: Option<String>,
    sizes: Option<u64>,
    size: Option<u64>,
    duration_ms: Option<u64>,
    code: Option<i64>,
    linear: Option<u64>,
    sort: Option<u64>,
    time: Option<u64>,
    bubble_skipped: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value).trim_matches('"').to_string();
        self.record_text(field, s);
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "sizes" => self.sizes = Some(value),
            "size" => self.size = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "linear" => self.linear = Some(value),
            "sort" => self.sort = Some(value),
            "time" => self.time = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        match field.name() {
            "code" => self.code = Some(value),
            _ => self.record_u64(field, value.max(0) as u64),
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "bubble_skipped" {
            self.bubble_skipped = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.record_text(field, value.to_string());
    }
}

impl EventVisitor {
    fn record_text(&mut self, field: &Field, value: String) {
        match field.name() {
            "event" => self.event = Some(value),
            "experiment" => self.experiment = Some(value),
            "unit" => self.unit = Some(value),
            "image" => self.image = Some(value),
            "program" => self.program = Some(value),
            "reason" => self.reason = Some(value),
            "data" => self.data = Some(value),
            "script" => self.script = Some(value),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "experiment_start" => format_experiment_start(v),
        "experiment_end" => format_experiment_end(v),
        "size_measured" => format_size_measured(v, level),
        "artifacts_written" => format_artifacts_written(v),
        "plot_rendered" => format_plot_rendered(v),
        "plot_failed" => format_plot_failed(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_experiment_start(v: &EventVisitor) -> String {
    let name = v.experiment.as_deref().unwrap_or("experiment");
    let sizes = v.sizes.unwrap_or(0);
    let unit = v.unit.as_deref().unwrap_or("ms");

    format!(
        "{} {} {} started │ {} sizes │ unit {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        name.white().bold(),
        sizes.to_formatted_string(&Locale::en).bright_yellow(),
        unit.bright_yellow()
    )
}

fn format_experiment_end(v: &EventVisitor) -> String {
    let name = v.experiment.as_deref().unwrap_or("experiment");
    let sizes = v.sizes.unwrap_or(0);
    let duration = v.duration_ms.unwrap_or(0);

    format!(
        "{} {} {} complete │ {} sizes │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        name.white().bold(),
        sizes.to_formatted_string(&Locale::en).white(),
        format_duration_ms(duration).yellow()
    )
}

fn format_size_measured(v: &EventVisitor, level: Level) -> String {
    if level != Level::DEBUG {
        return String::new();
    }

    let size = v.size.unwrap_or(0);
    let mut output = format!(
        "{} {} n = {:>9}",
        format_elapsed(),
        "⚡".bright_cyan(),
        size.to_formatted_string(&Locale::en).white()
    );

    if let Some(time) = v.time {
        output.push_str(&format!(
            " │ {}",
            time.to_formatted_string(&Locale::en).bright_magenta()
        ));
    }
    if let (Some(linear), Some(sort)) = (v.linear, v.sort) {
        output.push_str(&format!(
            " │ linear {} │ sort {}",
            linear.to_formatted_string(&Locale::en).bright_magenta(),
            sort.to_formatted_string(&Locale::en).bright_magenta()
        ));
    }
    if v.bubble_skipped == Some(true) {
        output.push_str(&format!(" │ {}", "bubble skipped".bright_black()));
    }

    output
}

fn format_artifacts_written(v: &EventVisitor) -> String {
    format!(
        "{} {} wrote {} and {}",
        format_elapsed(),
        "✓".bright_green(),
        v.data.as_deref().unwrap_or("?").white(),
        v.script.as_deref().unwrap_or("?").white()
    )
}

fn format_plot_rendered(v: &EventVisitor) -> String {
    format!(
        "{} {} plot rendered │ {}",
        format_elapsed(),
        "✓".bright_green(),
        v.image.as_deref().unwrap_or("?").bright_yellow()
    )
}

fn format_plot_failed(v: &EventVisitor) -> String {
    let program = v.program.as_deref().unwrap_or("plotter");
    let detail = match (&v.reason, v.code) {
        (Some(reason), _) => reason.clone(),
        (None, Some(code)) => format!("exit code {}", code),
        (None, None) => "unknown failure".to_string(),
    };

    format!(
        "{} {} {} failed │ {}",
        format_elapsed(),
        "✗".bright_red(),
        program.white().bold(),
        detail.bright_red()
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}
