//! Price report

use serde::Serialize;

use lattice_carts::{
    carts::{Cart, CartUuid},
    resolvers::{CartItemPriceResolver, CartItemPrices, ResolutionContext, ResolveError},
    totals::TotalsCollector,
};

/// Resolved prices for every line item of a cart.
#[derive(Debug, Serialize)]
pub(crate) struct CartReport {
    pub cart: CartUuid,
    pub currency: &'static str,
    pub items: Vec<ItemReport>,
}

/// Resolved prices for one line item.
#[derive(Debug, Serialize)]
pub(crate) struct ItemReport {
    pub sku: String,
    pub quantity: u32,
    pub prices: CartItemPrices,
}

/// Resolve all items of `cart` in a single pass.
pub(crate) fn build_report<C: TotalsCollector>(
    resolver: &CartItemPriceResolver<C>,
    cart: &Cart,
) -> Result<CartReport, ResolveError> {
    let mut context = ResolutionContext::new();
    let prices = resolver.resolve_cart(&mut context, cart)?;

    let items = cart
        .items()
        .iter()
        .zip(prices)
        .map(|(item, prices)| ItemReport {
            sku: item.sku().to_string(),
            quantity: item.quantity(),
            prices,
        })
        .collect();

    Ok(CartReport {
        cart: cart.uuid(),
        currency: cart.currency().iso_alpha_code,
        items,
    })
}

#[cfg(test)]
mod tests {
    use lattice_carts::{fixtures::parse_cart, totals::StoredTotalsCollector};
    use testresult::TestResult;

    use super::*;

    #[test]
    fn report_pairs_skus_with_prices() -> TestResult {
        let cart = parse_cart(
            "currency: USD\ntotals:\n  subtotal: '5.00'\n  subtotal_incl_tax: '5.00'\n  discount_amount: '0'\n  tax_amount: '0'\n  grand_total: '5.00'\nitems:\n  - sku: pen\n    quantity: 5\n    price: '1.00'\n",
        )?;
        let resolver = CartItemPriceResolver::new(StoredTotalsCollector);

        let report = build_report(&resolver, &cart)?;
        let json = serde_json::to_value(&report)?;

        assert_eq!(json["currency"], "USD");
        assert_eq!(json["items"][0]["sku"], "pen");
        assert_eq!(json["items"][0]["quantity"], 5);
        assert_eq!(json["items"][0]["prices"]["row_total"]["value"], 5.0);

        Ok(())
    }
}
