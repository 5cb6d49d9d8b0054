// Demo storefront with an inline tenant, mirroring what the site builder
// would supply per tenant in production.

use cannabizz_storefront::{mount_storefront, types::Tenant};

const DEMO_TENANT: &str = r#"{
    "businessName": "Cannabizz",
    "settings": {
        "pageContent": {
            "homeHeroSubtitle": "Your Vibe. Your Bud. Your Way.",
            "homeHeroDescription": "Premium products, expert guidance, delivered fast."
        }
    }
}"#;

fn main() {
    let tenant = Tenant::from_settings_json(DEMO_TENANT)
        .unwrap_or_else(|_| Tenant {
            business_name: "Cannabizz".into(),
            ..Default::default()
        });
    mount_storefront(tenant);
}
