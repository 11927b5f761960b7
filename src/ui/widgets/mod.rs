// src/ui/widgets/mod.rs

pub(crate) mod field_widgets;

pub(crate) use field_widgets::paint_field;
