use crate::collision::manifold::ContactSet;
use crate::math::vec2::Vec2;
use crate::objects::body::Body;

/// Coefficient of restitution: fraction of closing speed returned as
/// separating speed on impact.
pub const RESTITUTION: f64 = 0.55;

/// Fraction of tangential velocity retained per contact per step.
const FRICTION_RETAIN: f64 = 0.98;

/// Tangential speeds below this are left untouched, to avoid numerical
/// jitter at rest.
const FRICTION_THRESHOLD: f64 = 1e-3;

/// Resolves one overlapping pair: positional correction first, then the
/// normal impulse with friction damping and angular response, applied
/// equal and opposite to both bodies. Returns the scalar impulse
/// magnitude (0.0 when the pair was already separating).
pub fn resolve(
    body_a: &mut Body,
    body_b: &mut Body,
    axis: Vec2,
    depth: f64,
    contacts: &ContactSet,
) -> f64 {
    separate(body_a, body_b, axis, depth);
    let impulse = normal_impulse(body_a, body_b, contacts, axis);
    if impulse != 0.0 {
        apply_impulse(body_a, contacts, impulse, axis);
        apply_impulse(body_b, contacts, impulse, -axis);
    }
    impulse
}

/// Positional penetration correction. Each movable body is translated
/// along the axis by half the depth, or the full depth when the opposing
/// body is fixed, in the direction that separates the pair (the axis
/// points from A towards B).
pub fn separate(body_a: &mut Body, body_b: &mut Body, axis: Vec2, depth: f64) {
    if !body_a.is_fixed() {
        let share = if body_b.is_fixed() { depth } else { depth / 2.0 };
        body_a.translate(axis * -share);
    }
    if !body_b.is_fixed() {
        let share = if body_a.is_fixed() { depth } else { depth / 2.0 };
        body_b.translate(axis * share);
    }
}

/// Scalar normal impulse for the pair, or 0.0 if the bodies are already
/// separating along the axis.
///
/// The effective inverse mass includes the angular coupling terms
/// `(perp(r) . axis)^2 / |r|^2` for each body, with `r` running from the
/// body's center to the averaged contact point, so off-center contacts
/// impart spin at the expense of linear response.
pub fn normal_impulse(body_a: &Body, body_b: &Body, contacts: &ContactSet, axis: Vec2) -> f64 {
    let closing = body_a.velocity.dot(axis) - body_b.velocity.dot(axis);
    if closing <= 0.0 {
        return 0.0;
    }

    let point = contacts.average();
    let r_a = point - body_a.center();
    let r_b = point - body_b.center();
    let cross_a = r_a.perpendicular().dot(axis);
    let cross_b = r_b.perpendicular().dot(axis);
    let den = body_a.inv_mass
        + body_b.inv_mass
        + cross_a * cross_a / r_a.dot(r_a)
        + cross_b * cross_b / r_b.dot(r_b);

    -(1.0 + RESTITUTION) * closing / den
}

/// Applies a scalar impulse along `dir` to one body: angular response at
/// every contact point, tangential friction damping, then the linear
/// velocity change scaled by the inverse mass.
pub fn apply_impulse(body: &mut Body, contacts: &ContactSet, impulse: f64, dir: Vec2) {
    apply_angular_impulse(body, contacts, dir * impulse);

    let tangent = dir.perpendicular();
    let tangential = body.velocity.dot(tangent);
    if tangential.abs() >= FRICTION_THRESHOLD {
        body.velocity -= tangent * (tangential * (1.0 - FRICTION_RETAIN));
    }

    body.velocity += dir * (impulse * body.inv_mass);
}

/// Adds the torque contribution `cross(r, F) / |r|^2` of every contact
/// point to the body's angular velocity. Contact points contribute
/// independently and additively, with no distribution weighting.
/// Infinite-mass bodies are skipped entirely.
pub fn apply_angular_impulse(body: &mut Body, contacts: &ContactSet, impulse_vector: Vec2) {
    if body.is_fixed() {
        return;
    }
    let center = body.center();
    for point in contacts.as_slice() {
        let r = *point - center;
        body.angular_velocity += r.cross(impulse_vector) / r.dot(r);
    }
}
