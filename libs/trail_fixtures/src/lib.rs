//! Road network fixtures shared by the `trailfinder` tests and benchmarks.
//!
//! Fixtures are plain data so that they carry no dependency on the
//! routing crate itself. Positions are `(lng, lat)` in degrees, lengths
//! are metres and bearings are compass degrees.

/// Origin of the generated lattices, on the UBC campus.
pub const UBC_ORIGIN: (f64, f64) = (-123.2460, 49.2606);

/// Metres per degree of latitude.
const METRES_PER_DEGREE: f64 = 111_320.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixtureNode<I> {
    pub id: I,
    pub lng: f64,
    pub lat: f64,
    pub elevation: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixtureEdge<I> {
    pub source: I,
    pub target: I,
    pub length: f64,
    pub bearing: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Fixture<I> {
    pub nodes: Vec<FixtureNode<I>>,
    pub edges: Vec<FixtureEdge<I>>,
}

fn node<I>(id: I, lng: f64, lat: f64, elevation: Option<f64>) -> FixtureNode<I> {
    FixtureNode {
        id,
        lng,
        lat,
        elevation,
    }
}

fn edge<I>(source: I, target: I, length: f64, bearing: Option<f64>) -> FixtureEdge<I> {
    FixtureEdge {
        source,
        target,
        length,
        bearing,
    }
}

/// Two equal-length routes from `A` to `D`.
///
/// `A -> B -> D` holds a constant bearing, while `A -> C -> D`
/// turns through 80 degrees at `C`.
pub fn diamond() -> Fixture<&'static str> {
    Fixture {
        nodes: vec![
            node("A", -123.2500, 49.2600, Some(10.0)),
            node("B", -123.2500, 49.2605, Some(5.0)),
            node("C", -123.2493, 49.2600, Some(12.0)),
            node("D", -123.2500, 49.2610, Some(20.0)),
        ],
        edges: vec![
            edge("A", "B", 5.0, Some(0.0)),
            edge("A", "C", 5.0, Some(90.0)),
            edge("B", "D", 5.0, Some(0.0)),
            edge("C", "D", 5.0, Some(170.0)),
        ],
    }
}

/// A northbound approach to `B`, which then offers an eastward
/// turn (`C`, inserted first) and a straight continuation (`D`).
pub fn fork() -> Fixture<&'static str> {
    Fixture {
        nodes: vec![
            node("A", -123.2500, 49.2600, None),
            node("B", -123.2500, 49.2605, None),
            node("C", -123.2493, 49.2605, None),
            node("D", -123.2500, 49.2610, None),
        ],
        edges: vec![
            edge("A", "B", 5.0, Some(0.0)),
            edge("B", "C", 5.0, Some(90.0)),
            edge("B", "D", 5.0, Some(0.0)),
        ],
    }
}

/// `S` reaches `Y` both directly and through `X`. The detour through
/// `X` is only discoverable when visited nodes are scoped to the path.
pub fn shortcut() -> Fixture<&'static str> {
    Fixture {
        nodes: vec![
            node("S", -123.2500, 49.2600, Some(0.0)),
            node("X", -123.2495, 49.2600, Some(2.0)),
            node("Y", -123.2495, 49.2605, Some(1.0)),
            node("Z", -123.2495, 49.2615, Some(4.0)),
        ],
        edges: vec![
            edge("S", "X", 1.0, Some(90.0)),
            edge("S", "Y", 1.0, Some(45.0)),
            edge("X", "Y", 1.0, Some(0.0)),
            edge("Y", "Z", 10.0, Some(0.0)),
        ],
    }
}

/// Edges that exist but can never be walked: a zero-length and a
/// negative-length segment, beside a single usable one.
pub fn degenerate() -> Fixture<&'static str> {
    Fixture {
        nodes: vec![
            node("A", -123.2500, 49.2600, None),
            node("B", -123.2500, 49.2605, None),
            node("C", -123.2495, 49.2600, None),
            node("D", -123.2490, 49.2600, None),
        ],
        edges: vec![
            edge("A", "B", 0.0, Some(0.0)),
            edge("A", "C", 3.0, None),
            edge("C", "D", -1.0, Some(90.0)),
        ],
    }
}

/// Identifier of the lattice node at `(row, col)`.
pub fn grid_id(cols: usize, row: usize, col: usize) -> i64 {
    (row * cols + col) as i64 + 1
}

/// A `rows` by `cols` lattice of two-way streets, `spacing` metres apart.
///
/// Rows run northwards and columns eastwards from [`UBC_ORIGIN`]. For every
/// node the eastward pair of edges is inserted before the northward pair, so
/// native adjacency order prefers heading east. Elevation climbs gently to
/// the north-east with a periodic dip.
pub fn grid(rows: usize, cols: usize, spacing: f64) -> Fixture<i64> {
    let (lng0, lat0) = UBC_ORIGIN;
    let d_lat = spacing / METRES_PER_DEGREE;
    let d_lng = spacing / (METRES_PER_DEGREE * lat0.to_radians().cos());

    let mut nodes = Vec::with_capacity(rows * cols);
    let mut edges = Vec::with_capacity(rows * cols * 4);

    for row in 0..rows {
        for col in 0..cols {
            let elevation = (row * 7 + col * 3) % 20;
            nodes.push(node(
                grid_id(cols, row, col),
                lng0 + col as f64 * d_lng,
                lat0 + row as f64 * d_lat,
                Some(elevation as f64),
            ));
        }
    }

    for row in 0..rows {
        for col in 0..cols {
            let here = grid_id(cols, row, col);

            if col + 1 < cols {
                let east = grid_id(cols, row, col + 1);
                edges.push(edge(here, east, spacing, Some(90.0)));
                edges.push(edge(east, here, spacing, Some(270.0)));
            }

            if row + 1 < rows {
                let north = grid_id(cols, row + 1, col);
                edges.push(edge(here, north, spacing, Some(0.0)));
                edges.push(edge(north, here, spacing, Some(180.0)));
            }
        }
    }

    Fixture { nodes, edges }
}
