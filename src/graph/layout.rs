use crate::collections::FxIndexMap;
use crate::geometry::Point;


/// Drawing position of each station, keyed by name in `STATIONS` order
/// Consumed by whatever renders the network; the searches never look at it.
pub fn station_positions() -> FxIndexMap<&'static str, Point> {
    [
        ("Seolleung", Point::new(1.0, 3.0)),
        ("Wangsimni", Point::new(2.0, 2.0)),
        ("Seoul Station", Point::new(1.0, 1.0)),
        ("Jamsil", Point::new(2.0, 1.0)),
        ("Gachon Univ", Point::new(3.0, 2.0)),
        ("Bokjeong", Point::new(3.0, 3.0)),
        ("Hongdae", Point::new(1.0, 2.0)),
        ("Gyodae", Point::new(2.0, 3.0)),
        ("Yangjae", Point::new(3.0, 1.0)),
        ("Gangnam", Point::new(2.5, 2.5)),
    ]
    .into_iter()
    .collect()
}
