//! # Presenter
//!
//! The presenter is the only consumer that turns a prototype (or one of its nested
//! records and nodes) into text. It is a read-only projection: implementations receive a
//! shared reference and must not influence cloning in any way.

/// Renders an entity of type `T` to deterministic, human-readable text.
///
/// One presenter type usually implements this for every entity of a domain, so a root can
/// delegate nested detail to the same presenter:
///
/// ```rust
/// use prototype_framework::Presenter;
///
/// struct Point { x: u32, y: u32 }
/// struct Plain;
///
/// impl Presenter<Point> for Plain {
///     fn present(&self, item: &Point) -> String {
///         format!("{},{}", item.x, item.y)
///     }
/// }
///
/// assert_eq!(Plain.present(&Point { x: 1, y: 2 }), "1,2");
/// ```
pub trait Presenter<T: ?Sized> {
    fn present(&self, item: &T) -> String;
}

/// Joins the presentation of each item with `separator`, preserving order.
pub fn present_all<'a, T, P, I>(presenter: &P, items: I, separator: &str) -> String
where
    T: 'a,
    P: Presenter<T> + ?Sized,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .map(|item| presenter.present(item))
        .collect::<Vec<_>>()
        .join(separator)
}
