use super::Block;
use crate::core::types::{
    BlockConfig, Fragment, PermissionDef, PermissionLevel, PermissionScope, Step,
};

pub const CHECKOUT_ACTION: &str = "actions/checkout@v4";

/// Check out the repository code using actions/checkout.
pub struct Checkout;

impl Block for Checkout {
    fn id(&self) -> &'static str {
        "checkout"
    }

    fn name(&self) -> &'static str {
        "Checkout"
    }

    fn description(&self) -> &'static str {
        "Check out the repository code using actions/checkout"
    }

    fn emit(&self, config: &BlockConfig) -> Fragment {
        let mut step = Step::action("Checkout repository", CHECKOUT_ACTION);
        if let Some(dir) = &config.working_directory {
            step = step.input("path", dir.as_str());
        }
        Fragment::from_steps(vec![step])
    }

    fn permissions(&self) -> Vec<PermissionDef> {
        vec![PermissionDef {
            scope: PermissionScope::Contents,
            level: PermissionLevel::Read,
            reason: "Required to checkout repository code".to_string(),
        }]
    }
}
