pub mod fill;
pub mod forms;
pub mod highlight;
pub mod spell;
