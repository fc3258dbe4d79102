//! Shapes: a user-defined union with runtime method tables and a JSON wire format
//!
//! Run with `RUST_LOG=debug cargo run --example shapes` to see method tables being built.

use tracing_subscriber::EnvFilter;
use unionkit::adt::Adt;
use unionkit::{union_type, AdtError, Deserialization, Method, Serialization};

union_type! {
    /// A plane figure
    #[derive(Clone)]
    pub enum Shape as "demo:Shape" {
        /// Centered on the origin
        Circle(radius: f64),
        Rect(width: f64, height: f64),
        Triangle(a: f64, b: f64, c: f64),
        /// Not yet measured
        Unknown(),
    }
    derive(Equality, DebugRepresentation, Serialization);
}

fn area_method() -> Result<Method<Shape, f64>, AdtError> {
    Method::builder("area")
        .variant("Circle", |shape: &Shape| match shape {
            Shape::Circle(r) => std::f64::consts::PI * r * r,
            _ => 0.0,
        })
        .variant("Rect", |shape: &Shape| match shape {
            Shape::Rect(w, h) => w * h,
            _ => 0.0,
        })
        .variant("Triangle", |shape: &Shape| match shape {
            Shape::Triangle(a, b, c) => {
                let s = (a + b + c) / 2.0;
                (s * (s - a) * (s - b) * (s - c)).sqrt()
            }
            _ => 0.0,
        })
        .required()
        .build()
}

fn corners_method() -> Result<Method<Shape, u32>, AdtError> {
    Method::builder("corners")
        .variant("Rect", |_: &Shape| 4)
        .variant("Triangle", |_: &Shape| 3)
        .fallback(|_: &Shape| 0)
        .build()
}

fn main() -> Result<(), AdtError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let area = area_method()?;
    let corners = corners_method()?;

    let shapes = vec![
        Shape::Circle(1.0),
        Shape::Rect(2.0, 3.5),
        Shape::Triangle(3.0, 4.0, 5.0),
        Shape::Unknown(),
    ];

    println!("{}:", Shape::UNION);
    for variant in Shape::UNION.variants() {
        println!("  {variant}");
    }
    println!();

    for shape in &shapes {
        let area = match area.call(shape) {
            Ok(value) => format!("{value:.2}"),
            Err(err) => format!("n/a ({err})"),
        };
        println!(
            "{shape}: {} corners, area {area}",
            corners.call(shape)?
        );
    }
    println!();

    // wire format round trip
    for shape in &shapes {
        let json = shape.to_json()?;
        let back = Shape::from_json(&json)?;
        assert_eq!(&back, shape);
        println!("{json}");
    }

    let bogus = serde_json::json!({
        "@@type": "demo:Shape",
        "@@tag": "Hexagon",
        "values": {}
    });
    if let Err(err) = Shape::from_json(&bogus) {
        println!("\nrejected: {err}");
    }

    Ok(())
}
