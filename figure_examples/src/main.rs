use figures::{Circle, Cube, Figure, Rgb};

// Console walkthrough of the validated-mutation behavior: one circle and one
// cube, with both accepted and rejected color/side changes.
//
// Expected output:
//   (55, 66, 77)
//   (222, 35, 130)
//   [6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6]
//   [15]
//   15
//   216
fn main() {
    let mut circle1 = Circle::new(Rgb::new(200, 200, 100), &[10]);
    let mut cube1 = Cube::new(Rgb::new(222, 35, 130), &[6]);

    // Color changes:
    circle1.set_color(55, 66, 77); // changes
    println!("{}", circle1.color());
    cube1.set_color(300, 70, 15); // rejected, stays the same
    println!("{}", cube1.color());

    // Side changes:
    cube1.set_sides(&[5, 3, 12, 4, 5]); // rejected, stays the same
    println!("{:?}", cube1.sides());
    circle1.set_sides(&[15]); // changes
    println!("{:?}", circle1.sides());

    // Perimeter of the circle, i.e. its length:
    println!("{}", circle1.perimeter());

    // Volume of the cube:
    println!("{}", cube1.volume());
}
