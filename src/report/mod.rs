pub mod chart;
pub mod html;
