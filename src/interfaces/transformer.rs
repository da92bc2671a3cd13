// ============================================================================
// Transformer Interface
// Defines the contract for rendering monetary values to strings
// ============================================================================

use crate::domain::Snapshot;

/// Everything a transformer needs to render one value.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatContext<A> {
    /// Major-unit amount after rounding to the requested digits (45.45 USD is `45.45`)
    pub amount: f64,

    /// Exact decimal rendering ("45.45", "-0.05"), `None` when the base is not 10
    pub decimal: Option<String>,

    /// The value being rendered, after any rounding to the requested digits
    pub snapshot: Snapshot<A>,
}

/// Caller-supplied rendering step of [`to_format`](crate::ops::to_format).
///
/// Any `Fn(&FormatContext<A>) -> String` closure is a transformer.
pub trait Transformer<A> {
    /// Render a formatted value
    fn transform(&self, context: &FormatContext<A>) -> String;
}

impl<A, F> Transformer<A> for F
where
    F: Fn(&FormatContext<A>) -> String,
{
    fn transform(&self, context: &FormatContext<A>) -> String {
        self(context)
    }
}

/// Renders the bare unit amount: "45.45", "5"
#[derive(Debug, Clone, Copy, Default)]
pub struct AmountTransformer;

impl<A> Transformer<A> for AmountTransformer {
    fn transform(&self, context: &FormatContext<A>) -> String {
        context.amount.to_string()
    }
}

/// Renders the currency code before the amount: "USD 45.45"
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeTransformer;

impl<A> Transformer<A> for CodeTransformer {
    fn transform(&self, context: &FormatContext<A>) -> String {
        format!("{} {}", context.snapshot.currency.code, context.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Currency;

    fn context() -> FormatContext<i64> {
        FormatContext {
            amount: 45.45,
            decimal: Some("45.45".to_string()),
            snapshot: Snapshot {
                amount: 4545,
                currency: Currency::new("USD", 10, 2),
                scale: 2,
            },
        }
    }

    #[test]
    fn test_builtin_transformers() {
        assert_eq!(AmountTransformer.transform(&context()), "45.45");
        assert_eq!(CodeTransformer.transform(&context()), "USD 45.45");

        let whole = FormatContext {
            amount: 5.0,
            ..context()
        };
        assert_eq!(AmountTransformer.transform(&whole), "5");
        assert_eq!(CodeTransformer.transform(&whole), "USD 5");
    }

    #[test]
    fn test_closure_is_transformer() {
        let transformer = |ctx: &FormatContext<i64>| {
            format!("${}", ctx.decimal.as_deref().unwrap_or_default())
        };
        assert_eq!(transformer.transform(&context()), "$45.45");
    }
}
