//! Built-in demo catalog.
//!
//! The IT Health plan set used by tests and by integrators who want a
//! ready-made fixture before wiring a real source. Three buckets,
//! concatenated in the fixed base order: basic, security, accelerate.

use super::plan::{BillingInterval, Plan, PlanCatalog, PlanPhase};

/// Basic managed-IT plans.
#[must_use]
pub fn basic_plans() -> Vec<Plan> {
    vec![
        Plan::builder("starter-care", "Starter Care")
            .description("Entry-level remote monitoring for very small teams")
            .price(0)
            .phase(PlanPhase::Operate)
            .feature("Remote Helpdesk Support", true)
            .feature("Monthly Health Reports", true)
            .feature("Patch Management", false)
            .build(),
        Plan::builder("essential-care", "Essential Care")
            .description("Proactive maintenance and helpdesk for small offices")
            .price(1500)
            .phase(PlanPhase::Operate)
            .feature("Remote Helpdesk Support", true)
            .feature("Patch Management", true)
            .feature("Monthly Health Reports", true)
            .feature("Asset Inventory", true)
            .popular()
            .build(),
        Plan::builder("business-it", "Business IT")
            .description("Complete managed IT for growing businesses")
            .price(2500)
            .phase(PlanPhase::Operate)
            .feature("Remote Helpdesk Support", true)
            .feature("24/7 Support", true)
            .highlighted_feature("Cloud Backup Solutions", true)
            .feature("Patch Management", true)
            .feature("Uptime Monitoring", true)
            .recommended()
            .build(),
        Plan::builder("office-streamline", "Office Streamline")
            .description("Process tooling and workflow cleanup for busy teams")
            .price(1950)
            .phase(PlanPhase::Streamline)
            .feature("Workflow Automation", true)
            .feature("User Account Provisioning", true)
            .feature("Device Management", true)
            .build(),
    ]
}

/// Security-focused plans.
#[must_use]
pub fn security_plans() -> Vec<Plan> {
    vec![
        Plan::builder("shield-essentials", "Shield Essentials")
            .description("Baseline protection for every endpoint")
            .price(1200)
            .phase(PlanPhase::Secure)
            .feature("Managed Antivirus", true)
            .feature("Managed Firewall", true)
            .feature("Threat Hunting", false)
            .build(),
        Plan::builder("fortress-complete", "Fortress Complete")
            .description("Layered defence with compliance reporting")
            .price(4900)
            .phase(PlanPhase::Secure)
            .feature("Managed Antivirus", true)
            .feature("Managed Firewall", true)
            .highlighted_feature("Threat Hunting", true)
            .feature("Compliance Reporting", true)
            .feature("24/7 Support", true)
            .discount(20, 6100)
            .recommended()
            .build(),
        Plan::builder("security-audit", "Security Audit")
            .description("Once-off penetration test and posture review")
            .price(8500)
            .interval(BillingInterval::OnceOff)
            .phase(PlanPhase::Secure)
            .feature("Penetration Testing", true)
            .feature("Compliance Reporting", true)
            .feature("Remediation Roadmap", true)
            .build(),
    ]
}

/// Growth and modernization plans.
#[must_use]
pub fn accelerate_plans() -> Vec<Plan> {
    vec![
        Plan::builder("cloud-launchpad", "Cloud Launchpad")
            .description("Cloud migration with managed landing zone")
            .price(7500)
            .phase(PlanPhase::Accelerate)
            .feature("Cloud Migration Planning", true)
            .feature("Workflow Automation", true)
            .feature("Integration Consulting", true)
            .build(),
        Plan::builder("ai-operations", "AI Operations")
            .description("Machine-assisted ticket triage and capacity planning")
            .price(9900)
            .phase(PlanPhase::Accelerate)
            .feature("Automation Playbooks", true)
            .feature("Capacity Forecasting", true)
            .coming_soon()
            .build(),
    ]
}

/// The full demo catalog in base bucket order.
#[must_use]
pub fn demo_catalog() -> PlanCatalog {
    PlanCatalog::from_buckets(basic_plans(), security_plans(), accelerate_plans())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_bucket_order() {
        let catalog = demo_catalog();
        assert_eq!(catalog.len(), 9);
        // Basic bucket first, accelerate last
        assert_eq!(catalog.plans()[0].id, "starter-care");
        assert_eq!(catalog.plans()[catalog.len() - 1].id, "ai-operations");
    }

    #[test]
    fn test_demo_catalog_unique_ids() {
        let catalog = demo_catalog();
        let mut ids: Vec<&str> = catalog.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_demo_catalog_has_expected_shapes() {
        let catalog = demo_catalog();

        // One free plan
        assert!(catalog.get("starter-care").unwrap().is_free());

        // One once-off plan that suppresses the recurring suffix
        let audit = catalog.get("security-audit").unwrap();
        assert!(!audit.interval.has_recurring_suffix());

        // Coming-soon plan is listed but not purchasable
        let ai = catalog.get("ai-operations").unwrap();
        assert!(!ai.is_purchasable());

        // Discounted plan keeps a higher original price
        let fortress = catalog.get("fortress-complete").unwrap();
        assert!(fortress.original_price.unwrap() > fortress.price);
    }
}
