//! HTML output format for analysis reports
//!
//! Self-contained report page with styled tables, embedded CSS and a bar
//! rendering of the frequency distribution.

use crate::analysis::AnalysisReport;
use crate::dataset::{PriceSource, WEEK_LABELS};
use crate::inference::{Decision, LabReport};
use crate::socioeconomic::{format_thousands, SocioeconomicReport};
use crate::trend::TrendReport;

/// HTML output formatter
#[derive(Debug)]
pub struct HtmlOutput<'a> {
    report: &'a AnalysisReport,
}

impl<'a> HtmlOutput<'a> {
    pub fn new(report: &'a AnalysisReport) -> Self {
        Self { report }
    }

    /// Escape HTML special characters to prevent XSS
    fn escape_html(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&#39;")
    }

    /// Generate embedded CSS styles
    fn generate_styles() -> &'static str {
        r#"
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            margin: 20px;
            background-color: #f5f5f5;
        }
        h1, h2 {
            color: #333;
        }
        table {
            border-collapse: collapse;
            width: 100%;
            background-color: white;
            box-shadow: 0 1px 3px rgba(0,0,0,0.1);
            margin-bottom: 20px;
        }
        th, td {
            border: 1px solid #ddd;
            padding: 8px;
            text-align: left;
        }
        th {
            background-color: #4a90d9;
            color: white;
            font-weight: bold;
        }
        tr:nth-child(even) {
            background-color: #f9f9f9;
        }
        .price {
            font-family: monospace;
        }
        .bar {
            display: inline-block;
            height: 12px;
        }
        .bar-igor {
            background-color: #4a90d9;
        }
        .bar-gladson {
            background-color: #f0ad4e;
        }
        .decision-reject {
            color: #cc0000;
            font-weight: bold;
        }
        .decision-keep {
            color: #2e7d32;
            font-weight: bold;
        }
        .decision-skipped {
            color: #888;
            font-style: italic;
        }
        .narrative {
            background-color: white;
            padding: 12px;
            box-shadow: 0 1px 3px rgba(0,0,0,0.1);
        }
        .footer {
            margin-top: 20px;
            font-size: 0.8em;
            color: #888;
            text-align: center;
        }
        "#
    }

    fn row(cells: &[String]) -> String {
        let tds: Vec<String> = cells
            .iter()
            .map(|c| format!(r#"<td class="price">{}</td>"#, c))
            .collect();
        format!("<tr>{}</tr>\n", tds.join(""))
    }

    fn header(cells: &[&str]) -> String {
        let ths: Vec<String> = cells.iter().map(|h| format!("<th>{}</th>", h)).collect();
        format!("<tr>{}</tr>\n", ths.join(""))
    }

    fn trend_body(trend: &TrendReport) -> String {
        let mut html = String::new();
        html.push_str("<h2>Weekly prices</h2>\n<table>\n");
        html.push_str(&Self::header(&["Week", "Igor", "Gladson"]));
        for (week, label) in WEEK_LABELS.iter().enumerate() {
            html.push_str(&Self::row(&[
                label.to_string(),
                format!("R$ {:.2}", trend.igor[week]),
                format!("R$ {:.2}", trend.gladson[week]),
            ]));
        }
        html.push_str("</table>\n");

        html.push_str("<h2>Basket total cost (sum)</h2>\n<table>\n");
        html.push_str(&Self::header(&["Week", "Igor", "Gladson"]));
        for (week, label) in WEEK_LABELS.iter().enumerate() {
            html.push_str(&Self::row(&[
                label.to_string(),
                format!("R$ {:.2}", trend.igor_totals[week]),
                format!("R$ {:.2}", trend.gladson_totals[week]),
            ]));
        }
        html.push_str("</table>\n");
        html
    }

    fn lab_body(lab: &LabReport) -> String {
        let mut html = String::new();

        html.push_str("<h2>A. Frequency distribution</h2>\n<table>\n");
        html.push_str(&Self::header(&["Price range", "Igor", "Gladson", ""]));
        for bin in &lab.histogram.bins {
            let bars: String = PriceSource::ALL
                .iter()
                .map(|&source| {
                    let class = match source {
                        PriceSource::Igor => "bar bar-igor",
                        PriceSource::Gladson => "bar bar-gladson",
                    };
                    format!(
                        r#"<span class="{}" style="width: {}px"></span>"#,
                        class,
                        bin.count(source) * 20
                    )
                })
                .collect();
            html.push_str(&format!(
                "<tr><td class=\"price\">R$ {:.2} - R$ {:.2}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                bin.lower, bin.upper, bin.igor, bin.gladson, bars
            ));
        }
        html.push_str("</table>\n");

        html.push_str("<h2>B. Descriptive statistics</h2>\n<table>\n");
        html.push_str(&Self::header(&["Sample", "Mean", "Median", "Mode", "Std dev"]));
        for (source, summary) in [
            (PriceSource::Igor, &lab.igor_summary),
            (PriceSource::Gladson, &lab.gladson_summary),
        ] {
            html.push_str(&Self::row(&[
                source.name().to_string(),
                format!("R$ {:.2}", summary.mean),
                format!("R$ {:.2}", summary.median),
                format!("R$ {:.2}", summary.mode),
                format!("{:.4}", summary.std_dev),
            ]));
        }
        html.push_str("</table>\n");

        html.push_str(&format!(
            "<h2>C. Confidence interval ({:.0}%)</h2>\n<p>Igor true mean price of <b>{}</b>: \
             <span class=\"price\">[ R$ {:.2} - R$ {:.2} ]</span></p>\n",
            lab.interval.level * 100.0,
            Self::escape_html(&lab.item),
            lab.interval.lower,
            lab.interval.upper
        ));

        html.push_str("<h2>D. Hypothesis test</h2>\n");
        let test = match &lab.test {
            Some(test) => test,
            None => {
                html.push_str(&format!(
                    "<p class=\"decision-skipped\">Not computed: {}</p>\n",
                    Self::escape_html(lab.test_error.as_deref().unwrap_or("undefined"))
                ));
                return html;
            }
        };
        html.push_str("<table>\n");
        html.push_str(&Self::header(&["t statistic", "df", "p-value", "alpha"]));
        html.push_str(&Self::row(&[
            format!("{:.2}", test.statistic),
            format!("{:.2}", test.df),
            format!("{:.4}", test.pvalue),
            test.alpha.to_string(),
        ]));
        html.push_str("</table>\n");
        let (class, text) = match test.decision {
            Decision::Reject => ("decision-reject", "Reject H0: the mean prices differ"),
            Decision::FailToReject => (
                "decision-keep",
                "Fail to reject H0: no evidence the mean prices differ",
            ),
        };
        html.push_str(&format!("<p class=\"{}\">{}</p>\n", class, text));
        html
    }

    fn socioeconomic_body(socio: &SocioeconomicReport) -> String {
        let r = &socio.record;
        let mut html = String::new();
        html.push_str("<table>\n");
        html.push_str(&Self::header(&[
            "PIB per capita",
            "Average wage (min. wages)",
            "Basket cost",
            "Income commitment",
        ]));
        html.push_str(&Self::row(&[
            format!("R$ {}", format_thousands(r.pib_per_capita)),
            format!("{:.1}", r.average_wage),
            format!("R$ {:.2}", r.basket_cost),
            format!("{:.2}%", r.income_commitment),
        ]));
        html.push_str("</table>\n");
        html.push_str(&format!(
            "<p class=\"narrative\">{}</p>\n",
            Self::escape_html(&socio.narrative)
        ));
        html
    }

    /// Generate complete HTML document
    pub fn to_html(&self) -> String {
        let title = Self::escape_html(&self.report.title());
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n");
        html.push_str("<html lang=\"en\">\n");
        html.push_str("<head>\n");
        html.push_str("    <meta charset=\"UTF-8\">\n");
        html.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        html.push_str(&format!("    <title>{}</title>\n", title));
        html.push_str("    <style>");
        html.push_str(Self::generate_styles());
        html.push_str("</style>\n");
        html.push_str("</head>\n");
        html.push_str("<body>\n");
        html.push_str(&format!("<h1>{}</h1>\n", title));

        html.push_str(&match self.report {
            AnalysisReport::Trend(trend) => Self::trend_body(trend),
            AnalysisReport::Lab(lab) => Self::lab_body(lab),
            AnalysisReport::Socioeconomic(socio) => Self::socioeconomic_body(socio),
        });

        html.push_str(&format!(
            "<div class=\"footer\">Generated by cesta v{}</div>\n",
            env!("CARGO_PKG_VERSION")
        ));
        html.push_str("</body>\n</html>\n");
        html
    }
}
