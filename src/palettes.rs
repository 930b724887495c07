use lazy_static::lazy_static;
use crate::{Color, Thresholds};

// Population density classes (people / mi²) of the US states map.
lazy_static! {
  pub(crate) static ref DENSITY_CLASSES: Thresholds = {
    Thresholds::try_from(vec![0., 10., 20., 50., 100., 200., 500., 1000.])
      .unwrap_or_else(|e| unreachable!("density classes: {e}"))
  };
}

// Yellow-orange-red sequential scheme, light to dark.
lazy_static! {
  pub(crate) static ref YLORRD_8: Vec<Color> = {
    vec![
      Color::rgb(0xFF, 0xED, 0xA0),
      Color::rgb(0xFE, 0xD9, 0x76),
      Color::rgb(0xFE, 0xB2, 0x4C),
      Color::rgb(0xFD, 0x8D, 0x3C),
      Color::rgb(0xFC, 0x4E, 0x2A),
      Color::rgb(0xE3, 0x1A, 0x1C),
      Color::rgb(0xBD, 0x00, 0x26),
      Color::rgb(0x80, 0x00, 0x26),
    ]
  };
}
