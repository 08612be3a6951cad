//! Gnuplot script generation.
//!
//! Scripts are modelled as a multiplot of [`Panel`]s, each plotting one or
//! more [`Series`] read from whitespace-delimited data files by relative path.

use std::fmt;

/// How a series is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Style {
    LinesPoints { width: f64, point: u8, point_size: f64 },
    Points { point: u8, point_size: f64 },
    Lines { width: f64, dash: u8 },
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Style::LinesPoints {
                width,
                point,
                point_size,
            } => write!(f, "with linespoints lw {} pt {} ps {}", width, point, point_size),
            Style::Points { point, point_size } => {
                write!(f, "with points pt {} ps {}", point, point_size)
            }
            Style::Lines { width, dash } => write!(f, "with lines lw {} dt {}", width, dash),
        }
    }
}

/// One plotted curve: column `y` against column 1 of `file`.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub file: String,
    pub column: usize,
    /// Maps zero cells to `1/0` so gnuplot leaves them out of the curve.
    pub drop_zeros: bool,
    pub style: Style,
    pub color: String,
    pub title: Option<String>,
}

impl Series {
    pub fn new(
        file: impl Into<String>,
        column: usize,
        style: Style,
        color: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            column,
            drop_zeros: false,
            style,
            color: color.into(),
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Excludes zero-valued (unmeasured) rows from the curve.
    pub fn dropping_zeros(mut self) -> Self {
        self.drop_zeros = true;
        self
    }

    fn using(&self) -> String {
        if self.drop_zeros {
            format!("1:(${0} > 0 ? ${0} : 1/0)", self.column)
        } else {
            format!("1:{}", self.column)
        }
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' using {} {} lc rgb '{}'",
            self.file,
            self.using(),
            self.style,
            self.color
        )?;
        if let Some(title) = &self.title {
            write!(f, " title '{}'", title.replace('\'', "''"))?;
        }
        Ok(())
    }
}

/// A single chart inside the multiplot.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub title: String,
    pub title_font: u8,
    pub x_label: String,
    pub y_label: String,
    pub label_font: u8,
    pub log_scale: bool,
    pub key: bool,
    pub series: Vec<Series>,
}

impl Panel {
    /// Creates a panel with a key in the top-left and linear axes.
    pub fn new(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            title_font: 13,
            x_label: x_label.into(),
            y_label: y_label.into(),
            label_font: 11,
            log_scale: false,
            key: true,
            series: Vec::new(),
        }
    }

    pub fn with_fonts(mut self, title_font: u8, label_font: u8) -> Self {
        self.title_font = title_font;
        self.label_font = label_font;
        self
    }

    pub fn log_log(mut self) -> Self {
        self.log_scale = true;
        self
    }

    pub fn without_key(mut self) -> Self {
        self.key = false;
        self
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }
}

/// A complete multiplot PNG script.
///
/// # Example
///
/// ```
/// use running_times_bench::script::{GnuplotScript, Panel, Series, Style};
///
/// let script = GnuplotScript::new("out.png", (800, 600), (1, 1)).with_panel(
///     Panel::new("Demo", "n", "ms").with_series(
///         Series::new("data.txt", 2, Style::Lines { width: 2.0, dash: 1 }, "#000000")
///             .dropping_zeros(),
///     ),
/// );
/// let text = script.to_string();
/// assert!(text.contains("set output 'out.png'"));
/// assert!(text.contains("plot 'data.txt' using 1:($2 > 0 ? $2 : 1/0)"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GnuplotScript {
    pub output: String,
    pub size: (u32, u32),
    pub layout: (u32, u32),
    pub font_size: u8,
    pub panels: Vec<Panel>,
}

impl GnuplotScript {
    pub fn new(output: impl Into<String>, size: (u32, u32), layout: (u32, u32)) -> Self {
        Self {
            output: output.into(),
            size,
            layout,
            font_size: 12,
            panels: Vec::new(),
        }
    }

    pub fn with_panel(mut self, panel: Panel) -> Self {
        self.panels.push(panel);
        self
    }
}

impl fmt::Display for GnuplotScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "set terminal png size {},{} enhanced font 'Arial,{}'",
            self.size.0, self.size.1, self.font_size
        )?;
        writeln!(f, "set output '{}'", self.output)?;
        writeln!(f, "set multiplot layout {},{}", self.layout.0, self.layout.1)?;
        writeln!(f)?;

        let mut log_active = false;
        for panel in &self.panels {
            writeln!(f, "set title '{}' font 'Arial,{}'", panel.title, panel.title_font)?;
            writeln!(f, "set xlabel '{}' font 'Arial,{}'", panel.x_label, panel.label_font)?;
            writeln!(f, "set ylabel '{}' font 'Arial,{}'", panel.y_label, panel.label_font)?;
            if panel.log_scale {
                writeln!(f, "set logscale xy")?;
                log_active = true;
            } else if log_active {
                writeln!(f, "unset logscale")?;
                log_active = false;
            }
            writeln!(f, "set grid")?;
            if panel.key {
                writeln!(f, "set key left top")?;
            } else {
                writeln!(f, "unset key")?;
            }

            for (i, series) in panel.series.iter().enumerate() {
                let lead = if i == 0 { "plot " } else { "     " };
                let tail = if i + 1 < panel.series.len() { ", \\" } else { "" };
                writeln!(f, "{}{}{}", lead, series, tail)?;
            }
            writeln!(f)?;
        }

        writeln!(f, "unset multiplot")
    }
}
