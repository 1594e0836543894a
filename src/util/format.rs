use itertools::Itertools;
use crate::matrix::Mat;
use super::num::round_to;

pub fn mat_table(a: &Mat, digits: u32) -> String {
    use prettytable::*;

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_CLEAN);

    for i in 0 .. a.rows() {
        let cells = a.row(i).iter().map(|&x|
            Cell::new(&num_str(x, digits)).style_spec("r")
        ).collect_vec();
        table.add_row(Row::new(cells));
    }

    table.to_string()
}

pub fn solution_str(xs: &[f64]) -> String {
    xs.iter().enumerate().map(|(i, x)|
        format!("x{} = {}", i + 1, num_str(*x, 3))
    ).join("\n")
}

// `-0` is shown as `0`.
pub fn num_str(x: f64, digits: u32) -> String {
    let r = round_to(x, digits);
    if r == 0.0 {
        String::from("0")
    } else {
        r.to_string()
    }
}
