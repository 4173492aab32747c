pub mod char_field;
pub mod choice_field;
pub mod date_field;
pub mod integer_choice_field;
pub mod time_field;

pub use char_field::CharField;
pub use choice_field::ChoiceField;
pub use date_field::DateField;
pub use integer_choice_field::IntegerChoiceField;
pub use time_field::TimeField;
