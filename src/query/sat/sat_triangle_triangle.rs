use crate::math::{Real, Vector};
use crate::shape::Triangle;
use crate::utils::are_projections_separated;

/// One of the three edges of a triangle `ABC`.
///
/// The edge vectors are taken from the first vertex: `Ab` is `B - A`, `Ac` is `C - A`, and
/// `Bc` is their difference `(C - A) - (B - A)`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TriangleEdge {
    /// The edge from `A` to `B`.
    Ab,
    /// The edge from `A` to `C`.
    Ac,
    /// The edge from `B` to `C`.
    Bc,
}

impl TriangleEdge {
    /// The three edges, in order.
    pub const ALL: [Self; 3] = [Self::Ab, Self::Ac, Self::Bc];

    #[inline]
    fn index(self) -> usize {
        match self {
            Self::Ab => 0,
            Self::Ac => 1,
            Self::Bc => 2,
        }
    }
}

/// A candidate separating axis between two triangles `A` (`triangle1`) and `B` (`triangle2`).
///
/// With `E0 = A1 - A0`, `E1 = A2 - A0`, `E2 = E1 - E0` and `N = E0 × E1` for the first
/// triangle, and `F0`, `F1`, `F2`, `M` defined the same way for the second triangle:
///
/// - `FaceNormal1` is `N`, `FaceNormal2` is `M`.
/// - `EdgeEdge(i, j)` is `Ei × Fj`, where the [`TriangleEdge`] `Ab`, `Ac`, `Bc` stand for
///   the edges of index `0`, `1`, `2`.
/// - `CoplanarEdge1(i)` is `N × Ei` and `CoplanarEdge2(j)` is `N × Fj`. These lie in the
///   plane of the first triangle and only matter when both triangles are coplanar.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TriangleTriangleSeparatingAxis {
    /// The face normal `N` of the first triangle.
    FaceNormal1,
    /// The face normal `M` of the second triangle.
    FaceNormal2,
    /// The cross product `Ei × Fj` of the i-th edge of the first triangle with the j-th
    /// edge of the second triangle.
    EdgeEdge(TriangleEdge, TriangleEdge),
    /// The in-plane normal `N × Ei` of the i-th edge of the first triangle.
    CoplanarEdge1(TriangleEdge),
    /// The vector `N × Fj`, normal to the j-th edge of the second triangle.
    CoplanarEdge2(TriangleEdge),
}

impl TriangleTriangleSeparatingAxis {
    /// All the candidate axes, in the order they are tested by
    /// [`triangle_triangle_find_separating_axis`].
    ///
    /// The bare normal `N` is not tested a second time for the coplanar case: both
    /// triangles project to single points on it.
    pub const ALL: [Self; 17] = [
        Self::FaceNormal1,
        Self::FaceNormal2,
        Self::EdgeEdge(TriangleEdge::Ab, TriangleEdge::Ab),
        Self::EdgeEdge(TriangleEdge::Ab, TriangleEdge::Ac),
        Self::EdgeEdge(TriangleEdge::Ab, TriangleEdge::Bc),
        Self::EdgeEdge(TriangleEdge::Ac, TriangleEdge::Ab),
        Self::EdgeEdge(TriangleEdge::Ac, TriangleEdge::Ac),
        Self::EdgeEdge(TriangleEdge::Ac, TriangleEdge::Bc),
        Self::EdgeEdge(TriangleEdge::Bc, TriangleEdge::Ab),
        Self::EdgeEdge(TriangleEdge::Bc, TriangleEdge::Ac),
        Self::EdgeEdge(TriangleEdge::Bc, TriangleEdge::Bc),
        Self::CoplanarEdge1(TriangleEdge::Ab),
        Self::CoplanarEdge1(TriangleEdge::Ac),
        Self::CoplanarEdge1(TriangleEdge::Bc),
        Self::CoplanarEdge2(TriangleEdge::Ab),
        Self::CoplanarEdge2(TriangleEdge::Ac),
        Self::CoplanarEdge2(TriangleEdge::Bc),
    ];

    /// Is this axis one of the axes only needed for coplanar triangles?
    #[inline]
    pub fn is_coplanar_axis(&self) -> bool {
        matches!(self, Self::CoplanarEdge1(_) | Self::CoplanarEdge2(_))
    }

    /// The (unnormalized) direction of this axis for the given pair of triangles.
    ///
    /// The result is the zero vector whenever the axis is undefined, e.g., for `EdgeEdge`
    /// axes built from parallel edges.
    pub fn direction(&self, triangle1: &Triangle, triangle2: &Triangle) -> Vector<Real> {
        TriangleTriangleSat::new(triangle1, triangle2).direction(*self)
    }

    /// Does this axis separate the two triangles?
    ///
    /// This uses the same closed-form projections as
    /// [`triangle_triangle_find_separating_axis`].
    pub fn separates(&self, triangle1: &Triangle, triangle2: &Triangle) -> bool {
        TriangleTriangleSat::new(triangle1, triangle2).separates(*self)
    }
}

/// Edges, normals, and offset of a pair of triangles, expressed relative to the first vertex
/// of the first triangle.
struct TriangleTriangleSat {
    e: [Vector<Real>; 3],
    f: [Vector<Real>; 3],
    n: Vector<Real>,
    m: Vector<Real>,
    d: Vector<Real>,
}

impl TriangleTriangleSat {
    fn new(triangle1: &Triangle, triangle2: &Triangle) -> Self {
        let e0 = triangle1.b - triangle1.a;
        let e1 = triangle1.c - triangle1.a;
        let f0 = triangle2.b - triangle2.a;
        let f1 = triangle2.c - triangle2.a;

        Self {
            e: [e0, e1, e1 - e0],
            f: [f0, f1, f1 - f0],
            n: e0.cross(&e1),
            m: f0.cross(&f1),
            d: triangle2.a - triangle1.a,
        }
    }

    fn direction(&self, axis: TriangleTriangleSeparatingAxis) -> Vector<Real> {
        match axis {
            TriangleTriangleSeparatingAxis::FaceNormal1 => self.n,
            TriangleTriangleSeparatingAxis::FaceNormal2 => self.m,
            TriangleTriangleSeparatingAxis::EdgeEdge(i, j) => {
                self.e[i.index()].cross(&self.f[j.index()])
            }
            TriangleTriangleSeparatingAxis::CoplanarEdge1(i) => self.n.cross(&self.e[i.index()]),
            TriangleTriangleSeparatingAxis::CoplanarEdge2(j) => self.n.cross(&self.f[j.index()]),
        }
    }

    /// `(Ei × Fj) · N`.
    ///
    /// The terms involving `E2` or `F2` are derived from the ones involving the two other
    /// edges.
    fn lambda(&self, i: usize, j: usize) -> Real {
        match (i, j) {
            (2, _) => self.lambda(1, j) - self.lambda(0, j),
            (_, 2) => self.lambda(i, 1) - self.lambda(i, 0),
            _ => self.e[i].cross(&self.f[j]).dot(&self.n),
        }
    }

    /// Projections of `[A0, A1, A2]` and `[B0, B1, B2]` on `axis`, relative to the projection
    /// of `A0`.
    fn projections(&self, axis: TriangleTriangleSeparatingAxis) -> ([Real; 3], [Real; 3]) {
        match axis {
            TriangleTriangleSeparatingAxis::FaceNormal1 => {
                let q0 = self.n.dot(&self.d);
                let q = [0.0, self.n.dot(&self.f[0]), self.n.dot(&self.f[1])];
                ([0.0; 3], shifted(q0, q))
            }
            TriangleTriangleSeparatingAxis::FaceNormal2 => {
                let p = [0.0, self.m.dot(&self.e[0]), self.m.dot(&self.e[1])];
                (p, [self.m.dot(&self.d); 3])
            }
            TriangleTriangleSeparatingAxis::EdgeEdge(i, j) => {
                let (i, j) = (i.index(), j.index());
                let q0 = self.e[i].cross(&self.f[j]).dot(&self.d);
                let p = edge_offsets(i, self.n.dot(&self.f[j]));
                let q = edge_offsets(j, -self.m.dot(&self.e[i]));
                (p, shifted(q0, q))
            }
            TriangleTriangleSeparatingAxis::CoplanarEdge1(i) => {
                let i = i.index();
                let q0 = self.n.cross(&self.e[i]).dot(&self.d);
                let p = edge_offsets(i, -self.n.norm_squared());
                let q = [0.0, self.lambda(i, 0), self.lambda(i, 1)];
                (p, shifted(q0, q))
            }
            TriangleTriangleSeparatingAxis::CoplanarEdge2(j) => {
                let j = j.index();
                let mu = self.f[0].cross(&self.f[1]).dot(&self.n);
                let q0 = self.n.cross(&self.f[j]).dot(&self.d);
                let p = [0.0, -self.lambda(0, j), -self.lambda(1, j)];
                let q = edge_offsets(j, -mu);
                (p, shifted(q0, q))
            }
        }
    }

    #[inline]
    fn separates(&self, axis: TriangleTriangleSeparatingAxis) -> bool {
        let (p, q) = self.projections(axis);
        are_projections_separated(p, q)
    }
}

/// Projections of the three vertices of a triangle on an axis orthogonal to its `edge`-th
/// edge, relative to the projection of its first vertex.
///
/// `k` is the projection of the other edge adjacent to the first vertex, up to the sign
/// dictated by the edge order.
#[inline]
fn edge_offsets(edge: usize, k: Real) -> [Real; 3] {
    match edge {
        0 => [0.0, 0.0, -k],
        1 => [0.0, k, 0.0],
        _ => [0.0, k, k],
    }
}

#[inline]
fn shifted(q0: Real, offsets: [Real; 3]) -> [Real; 3] {
    [q0 + offsets[0], q0 + offsets[1], q0 + offsets[2]]
}

/// Finds an axis separating two triangles, if there is one.
///
/// The axes of [`TriangleTriangleSeparatingAxis::ALL`] are tested in order and the first
/// one along which the projections of the two triangles do not overlap is returned. The
/// projections are computed in closed form from a handful of dot products instead of
/// projecting all six vertices on every axis.
///
/// Returns `None` if none of the 17 axes separates the triangles, meaning they intersect.
/// Touching triangles are not separated.
///
/// Degenerate (zero-area) triangles are not rejected: their normal is zero, so every axis
/// built from it projects everything onto a single point and cannot separate anything.
/// Since the in-plane axes are built from the normal of `triangle1` only, the result may
/// then depend on the order of the arguments.
pub fn triangle_triangle_find_separating_axis(
    triangle1: &Triangle,
    triangle2: &Triangle,
) -> Option<TriangleTriangleSeparatingAxis> {
    if log::log_enabled!(log::Level::Debug)
        && (triangle1.is_affinely_dependent() || triangle2.is_affinely_dependent())
    {
        log::debug!(
            "Degenerate triangle given to the triangle-triangle SAT: {:?}, {:?}.",
            triangle1,
            triangle2
        );
    }

    let sat = TriangleTriangleSat::new(triangle1, triangle2);
    let axis = TriangleTriangleSeparatingAxis::ALL
        .iter()
        .copied()
        .find(|axis| sat.separates(*axis));

    if let Some(axis) = axis {
        log::trace!("Triangles separated along {:?}.", axis);
    }

    axis
}

/// Does `axis` separate the two triangles?
///
/// Unlike [`triangle_triangle_find_separating_axis`], this projects the six vertices
/// explicitly on `axis`, which does not need to be normalized.
pub fn triangle_triangle_is_separating_axis(
    triangle1: &Triangle,
    triangle2: &Triangle,
    axis: &Vector<Real>,
) -> bool {
    let origin = triangle1.a;
    let p = triangle1.vertices().map(|pt| (pt - origin).dot(axis));
    let q = triangle2.vertices().map(|pt| (pt - origin).dot(axis));

    are_projections_separated(p, q)
}
