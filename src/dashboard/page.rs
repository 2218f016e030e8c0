//! Dashboard page
//!
//! `build_page` turns the two aggregates into a `DashboardPage` document:
//! header, two titled chart sections and a footer. It does no I/O, so the
//! page can be built and inspected without a server.

use crate::analytics::{DomainPopularity, YearlyTrend, COUNT_LABEL};

use super::chart::{escape, series_color, Bar, BarChart, Chart, LineChart, LineSeries};

pub const PAGE_TITLE: &str = "MITS Internship Engagement Dashboard";
pub const PAGE_SUBTITLE: &str = "Analysis of student application and participation data.";
pub const FOOTER_TEXT: &str =
    "© 2024 Micro Information Technology Services (MITS) | Data Analytics Division";

/// One titled section of the page
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSection {
    /// Element id of the chart container
    pub id: String,
    pub heading: String,
    pub description: String,
    pub chart: Chart,
}

/// Complete dashboard document
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardPage {
    pub title: String,
    pub subtitle: String,
    pub sections: Vec<ChartSection>,
    pub footer: String,
}

/// Lay out the popularity and trend charts
pub fn build_page(popularity: &DomainPopularity, trend: &YearlyTrend) -> DashboardPage {
    DashboardPage {
        title: PAGE_TITLE.to_string(),
        subtitle: PAGE_SUBTITLE.to_string(),
        sections: vec![
            ChartSection {
                id: "popularity-chart".to_string(),
                heading: "Overall Domain Popularity".to_string(),
                description: "This chart shows the total number of applications received for each domain since 2021. It helps identify the all-time most sought-after fields.".to_string(),
                chart: Chart::Bar(popularity_chart(popularity)),
            },
            ChartSection {
                id: "trends-chart".to_string(),
                heading: "Emerging and Declining Trends".to_string(),
                description: "The line chart tracks application numbers year-over-year. Watch for lines with a steep upward slope: these are the 'emerging' domains.".to_string(),
                chart: Chart::Line(trend_chart(trend)),
            },
        ],
        footer: FOOTER_TEXT.to_string(),
    }
}

/// Horizontal bars, least popular domain at the bottom
pub fn popularity_chart(popularity: &DomainPopularity) -> BarChart {
    BarChart {
        title: "Most Popular Internship Domains (Overall)".to_string(),
        value_label: "Total Applications".to_string(),
        bars: popularity
            .rows()
            .iter()
            .map(|row| Bar {
                label: row.domain.clone(),
                value: row.count,
            })
            .collect(),
    }
}

/// One line per domain over the years present in the data
pub fn trend_chart(trend: &YearlyTrend) -> LineChart {
    let years = trend.years();
    let title = match (years.first(), years.last()) {
        (Some(first), Some(last)) => {
            format!("Emerging Internship Domain Trends ({}-{})", first, last)
        }
        _ => "Emerging Internship Domain Trends".to_string(),
    };

    LineChart {
        title,
        x_label: "Year".to_string(),
        y_label: COUNT_LABEL.to_string(),
        legend_title: "Domain".to_string(),
        series: trend
            .series()
            .into_iter()
            .enumerate()
            .map(|(position, series)| LineSeries {
                color: series_color(&series.domain, position).to_string(),
                name: series.domain,
                points: series.points,
            })
            .collect(),
    }
}

const STYLE: &str = "body{margin:0;background:#f8f9fa;font-family:Arial,sans-serif;padding:2rem}\
.header{text-align:center;margin-bottom:40px}\
.header h1{color:#2c3e50;font-weight:bold}\
.header p{color:#7f8c8d;font-size:1.2rem}\
.main-content{background:#ffffff;padding:30px;border-radius:10px;box-shadow:0 4px 6px rgba(0,0,0,0.1)}\
.main-content h2{border-bottom:2px solid #e0e0e0;padding-bottom:10px}\
.main-content p{color:#555}\
hr{margin:40px 0}\
footer{text-align:center;margin-top:40px;padding:20px;color:#95a5a6}";

impl DashboardPage {
    /// Render as a standalone HTML document with inline SVG charts
    pub fn render(&self) -> String {
        let mut s = String::with_capacity(64 * 1024);
        s.push_str("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">");
        s.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
        s.push_str(&format!("<title>{}</title>", escape(&self.title)));
        s.push_str(&format!("<style>{}</style></head><body>", STYLE));

        s.push_str(&format!(
            "<div class=\"header\"><h1>{}</h1><p>{}</p></div>",
            escape(&self.title),
            escape(&self.subtitle)
        ));

        s.push_str("<div class=\"main-content\">");
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                s.push_str("<hr>");
            }
            s.push_str(&format!(
                "<section><h2>{}</h2><p>{}</p><div id=\"{}\" class=\"chart\">{}</div></section>",
                escape(&section.heading),
                escape(&section.description),
                escape(&section.id),
                section.chart.to_svg()
            ));
        }
        s.push_str("</div>");

        s.push_str(&format!(
            "<footer><p>{}</p></footer></body></html>",
            escape(&self.footer)
        ));
        s
    }
}
