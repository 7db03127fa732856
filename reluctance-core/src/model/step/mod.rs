mod walk_step_accessibility;

pub use walk_step_accessibility::WalkStepAccessibility;
