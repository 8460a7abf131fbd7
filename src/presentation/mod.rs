/// ASCII drawings of a byte on the wire
pub mod diagram;

/// Reference tables and scenarios
pub mod reference;
