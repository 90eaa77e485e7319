use crate::domain::model::PricingQuote;
use crate::report::fields::ReportFields;
use crate::report::format::format_money;
use crate::utils::error::Result;
use tera::{Context, Tera};

const TEMPLATE_NAME: &str = "report_template.html";
const TEMPLATE: &str = include_str!("../../templates/report_template.html");
const DEFAULT_TITLE: &str = "Automation Service Pricing Report";

pub struct HtmlRenderer {
    tera: Tera,
}

impl HtmlRenderer {
    /// The `.html` template name keeps Tera's autoescaping on, so tool names
    /// and scenario titles cannot inject markup.
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)?;
        Ok(Self { tera })
    }

    pub fn render(&self, quote: &PricingQuote) -> Result<String> {
        let context = build_context(quote);
        Ok(self.tera.render(TEMPLATE_NAME, &context)?)
    }
}

fn build_context(quote: &PricingQuote) -> Context {
    let mut context = Context::new();
    for (key, value) in ReportFields::from_quote(quote).iter() {
        context.insert(key, value);
    }

    let basic = &quote.basic;
    let advanced = &quote.advanced;
    let premium_percent = basic.tools_premium_percent();

    context.insert("services", &quote.inputs.service_types);
    context.insert("title", quote.name.as_deref().unwrap_or(DEFAULT_TITLE));
    context.insert(
        "generated_at",
        &quote.generated_at.format("%Y-%m-%d %H:%M UTC").to_string(),
    );
    context.insert(
        "tool_premium",
        &(premium_percent > 0.0).then(|| format!("{:.0}", premium_percent)),
    );
    context.insert("basic_package", &format_money(basic.packages.basic, true));
    context.insert("standard_package", &format_money(basic.packages.standard, true));
    context.insert("premium_package", &format_money(basic.packages.premium, true));
    context.insert("value_low", &format_money(basic.value_based.low, true));
    context.insert("value_high", &format_money(basic.value_based.high, true));
    context.insert(
        "roi_share_low",
        &format!("{:.0}", basic.roi_based.savings_share.low * 100.0),
    );
    context.insert(
        "roi_share_high",
        &format!("{:.0}", basic.roi_based.savings_share.high * 100.0),
    );
    context.insert("integration_cost", &format_money(advanced.integration_cost, true));
    context.insert("custom_code_cost", &format_money(advanced.custom_code_cost, true));
    context.insert("training_cost", &format_money(advanced.training_cost, true));
    context.insert("user_scale_cost", &format_money(advanced.user_scale_cost, true));
    context
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::compute_quote;
    use crate::domain::model::{AdvancedInputs, PricingInputs};

    #[test]
    fn test_render_reference_report() {
        let quote = compute_quote(None, PricingInputs::default(), AdvancedInputs::default());
        let html = HtmlRenderer::new().unwrap().render(&quote).unwrap();

        assert!(html.contains("<title>Automation Service Pricing Report</title>"));
        assert!(html.contains("$50.00"));
        assert!(html.contains("$1000.00"));
        assert!(html.contains("$1,500.00 - $3,000.00"));
        assert!(html.contains("5-10% of demonstrated savings"));
        assert!(!html.contains("tool premium)"));
        assert!(html.contains("<td>Email Automation</td>"));
    }

    #[test]
    fn test_render_shows_tool_premium() {
        let inputs = PricingInputs {
            tools_used: vec!["Zapier".into(), "n8n".into(), "Python".into()],
            ..PricingInputs::default()
        };
        let quote = compute_quote(None, inputs, AdvancedInputs::default());
        let html = HtmlRenderer::new().unwrap().render(&quote).unwrap();

        assert!(html.contains("(+10% tool premium)"));
        assert!(html.contains("Zapier, n8n, Python"));
    }

    #[test]
    fn test_render_escapes_user_text() {
        let inputs = PricingInputs {
            tools_used: vec!["<script>alert(1)</script>".into()],
            ..PricingInputs::default()
        };
        let quote = compute_quote(
            Some("Acme & Co".to_string()),
            inputs,
            AdvancedInputs::default(),
        );
        let html = HtmlRenderer::new().unwrap().render(&quote).unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Acme &amp; Co"));
    }
}
