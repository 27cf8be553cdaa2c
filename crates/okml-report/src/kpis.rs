//! KPI evidence: Markdown summary and HTML dashboard

use crate::num;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use okml_core::KpiPair;

/// Markdown KPI evidence pack
#[must_use]
pub fn render_kpis_md(kpis: &KpiPair) -> String {
    let (b, a) = (&kpis.before, &kpis.after);
    let improvement = (kpis.provisioning_improvement() * 1000.0).round() / 10.0;
    format!(
        "# KPI Evidence Pack\n\n\
         ## Reliability\n\
         - Before: **{}%** monthly uptime\n\
         - After: **{}%** monthly uptime\n\n\
         ## Provisioning speed\n\
         - Before P50: **{} min**\n\
         - After P50: **{} min**\n\
         - Improvement: **{}%**\n",
        num(b.uptime_monthly_percent),
        num(a.uptime_monthly_percent),
        num(b.provisioning_time_minutes_p50),
        num(a.provisioning_time_minutes_p50),
        num(improvement),
    )
}

/// `data:` URI for an inline PNG image
#[must_use]
pub fn png_data_uri(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", BASE64.encode(png))
}

/// Self-contained dashboard page embedding both charts
#[must_use]
pub fn render_dashboard_html(kpis: &KpiPair, uptime_png: &[u8], provisioning_png: &[u8]) -> String {
    let (b, a) = (&kpis.before, &kpis.after);
    format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>OKML KPI Dashboard</title>
    <style>
      body {{ font-family: system-ui, -apple-system, Segoe UI, Roboto, sans-serif; margin: 2rem; }}
      .grid {{ display: grid; grid-template-columns: 1fr; gap: 1.5rem; max-width: 980px; }}
      .card {{ border: 1px solid #e5e7eb; border-radius: 12px; padding: 1rem 1.25rem; }}
      h1 {{ margin: 0 0 0.5rem 0; }}
      .kpi {{ display: flex; gap: 1.25rem; flex-wrap: wrap; }}
      .kpi div {{
        background: #f9fafb;
        border: 1px solid #eef2f7;
        padding: 0.75rem 1rem;
        border-radius: 10px;
      }}
      img {{ width: 100%; height: auto; border-radius: 8px; border: 1px solid #f0f0f0; }}
      code {{ background: #f3f4f6; padding: 0.1rem 0.3rem; border-radius: 6px; }}
    </style>
  </head>
  <body>
    <div class="grid">
      <div class="card">
        <h1>OpenStack + Kubernetes Modernization | KPI Evidence</h1>
        <p>
          This dashboard is generated locally by <code>okml kpis</code> with deterministic inputs.
        </p>
        <div class="kpi">
          <div><strong>Before uptime</strong><br />{before_uptime}%</div>
          <div><strong>After uptime</strong><br />{after_uptime}%</div>
          <div>
            <strong>Before provisioning P50</strong><br />
            {before_p50} min
          </div>
          <div>
            <strong>After provisioning P50</strong><br />
            {after_p50} min
          </div>
        </div>
      </div>
      <div class="card">
        <h2>Uptime trend</h2>
        <img src="{uptime_uri}" alt="Uptime trend" />
      </div>
      <div class="card">
        <h2>Provisioning time</h2>
        <img src="{provisioning_uri}" alt="Provisioning time" />
      </div>
    </div>
  </body>
</html>
"#,
        before_uptime = num(b.uptime_monthly_percent),
        after_uptime = num(a.uptime_monthly_percent),
        before_p50 = num(b.provisioning_time_minutes_p50),
        after_p50 = num(a.provisioning_time_minutes_p50),
        uptime_uri = png_data_uri(uptime_png),
        provisioning_uri = png_data_uri(provisioning_png),
    )
}
