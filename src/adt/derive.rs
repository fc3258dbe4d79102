//! Runtime support for the structural derivations of [`union_type!`](crate::union_type)

use std::fmt;

/// Render `TypeName.Variant(field: value, ...)`.
///
/// Field values use their own `Debug`, so nested unions render recursively. The
/// alternate flag (`{:#?}`) is passed down to the fields.
///
/// ```
/// use std::fmt;
/// use unionkit::adt::derive::write_repr;
///
/// struct Point(i32, i32);
///
/// impl fmt::Debug for Point {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write_repr(f, "Geometry", "Point", &[("x", &self.0), ("y", &self.1)])
///     }
/// }
///
/// assert_eq!(format!("{:?}", Point(1, -2)), "Geometry.Point(x: 1, y: -2)");
/// ```
pub fn write_repr(
    f: &mut fmt::Formatter<'_>,
    type_name: &str,
    variant: &str,
    fields: &[(&str, &dyn fmt::Debug)],
) -> fmt::Result {
    write!(f, "{type_name}.{variant}(")?;
    for (index, (name, value)) in fields.iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        if f.alternate() {
            write!(f, "{name}: {value:#?}")?;
        } else {
            write!(f, "{name}: {value:?}")?;
        }
    }
    f.write_str(")")
}
