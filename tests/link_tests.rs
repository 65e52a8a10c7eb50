use approx::assert_relative_eq;
use ballast::{
    CableConstraint, CableLink, Contact, ContactGenerator, GroundContacts, Particle,
    PhysicsError, RodConstraint, RodLink, Vec, Vec2, Vec3,
};

type V2 = Vec2<f64>;

fn assert_normal(actual: V2, expected: V2) {
    assert_relative_eq!(actual.x, expected.x, epsilon = 1e-12);
    assert_relative_eq!(actual.y, expected.y, epsilon = 1e-12);
}

fn pair(distance: f64) -> std::vec::Vec<Particle<Vec2<f64>>> {
    vec![
        Particle::new(Vec2::new(0.0, 0.0), 1.0).unwrap(),
        Particle::new(Vec2::new(distance, 0.0), 1.0).unwrap(),
    ]
}

fn buffer(len: usize) -> std::vec::Vec<Contact<Vec2<f64>>> {
    vec![Contact::default(); len]
}

#[test]
fn slack_cable_writes_nothing() {
    let ps = pair(4.0);
    let mut contacts = buffer(1);
    let cable = CableLink::<V2>::new(0, 1, 5.0, 0.3);
    assert_eq!(cable.add_contact(&ps, &mut contacts), 0);
    assert_eq!(contacts[0], Contact::default());
}

#[test]
fn overstretched_cable_writes_one_contact() {
    let ps = pair(6.0);
    let mut contacts = buffer(2);
    let cable = CableLink::<V2>::new(0, 1, 5.0, 0.3);

    assert_eq!(cable.add_contact(&ps, &mut contacts), 1);
    let c = &contacts[0];
    assert_eq!(c.a, 0);
    assert_eq!(c.b, Some(1));
    assert_relative_eq!(c.penetration, 1.0);
    assert_relative_eq!(c.restitution, 0.3);
    assert_normal(c.normal, Vec2::new(1.0, 0.0));
    assert_eq!(contacts[1], Contact::default());
}

#[test]
fn cable_contact_pulls_ends_together() {
    let mut ps = pair(6.0);
    ps[1].set_velocity(Vec2::new(1.0, 0.0));
    let mut contacts = buffer(1);
    CableLink::<V2>::new(0, 1, 5.0, 0.0).add_contact(&ps, &mut contacts);

    contacts[0].resolve(&mut ps, 1.0 / 60.0);

    assert_relative_eq!(ps[0].position().distance(ps[1].position()), 5.0, epsilon = 1e-12);
    assert_relative_eq!(ps[1].velocity().x - ps[0].velocity().x, 0.0, epsilon = 1e-12);
}

#[test]
fn rod_at_length_writes_nothing() {
    let ps = pair(5.0);
    let mut contacts = buffer(1);
    assert_eq!(RodLink::<V2>::new(0, 1, 5.0).add_contact(&ps, &mut contacts), 0);
}

#[test]
fn stretched_and_compressed_rods_write_inelastic_contacts() {
    let rod = RodLink::<V2>::new(0, 1, 5.0);

    let mut contacts = buffer(1);
    assert_eq!(rod.add_contact(&pair(5.1), &mut contacts), 1);
    assert_relative_eq!(contacts[0].restitution, 0.0);
    assert_relative_eq!(contacts[0].penetration, 0.1, epsilon = 1e-12);
    assert_normal(contacts[0].normal, Vec2::new(1.0, 0.0));

    let mut contacts = buffer(1);
    assert_eq!(rod.add_contact(&pair(4.9), &mut contacts), 1);
    assert_relative_eq!(contacts[0].restitution, 0.0);
    assert_relative_eq!(contacts[0].penetration, 0.1, epsilon = 1e-12);
    assert_normal(contacts[0].normal, Vec2::new(-1.0, 0.0));
}

#[test]
fn compressed_rod_is_pushed_back_to_length() {
    let mut ps = pair(4.0);
    let mut contacts = buffer(1);
    RodLink::<V2>::new(0, 1, 5.0).add_contact(&ps, &mut contacts);
    contacts[0].resolve(&mut ps, 1.0 / 60.0);
    assert_relative_eq!(ps[0].position().distance(ps[1].position()), 5.0, epsilon = 1e-12);
}

#[test]
fn rod_from_particles_takes_current_distance() {
    let ps = pair(3.0);
    let rod = RodLink::from_particles(0, 1, &ps);
    assert_relative_eq!(rod.length, 3.0);
    assert_eq!(rod.add_contact(&ps, &mut buffer(1)), 0);
}

#[test]
fn generators_respect_an_empty_buffer() {
    let ps = pair(10.0);
    let mut empty = buffer(0);
    assert_eq!(CableLink::<V2>::new(0, 1, 5.0, 0.0).add_contact(&ps, &mut empty), 0);
    assert_eq!(RodLink::<V2>::new(0, 1, 5.0).add_contact(&ps, &mut empty), 0);
    assert_eq!(CableConstraint::<V2>::new(0, Vec2::new(9.0, 0.0), 1.0, 0.0).add_contact(&ps, &mut empty), 0);
    assert_eq!(RodConstraint::<V2>::new(0, Vec2::new(9.0, 0.0), 1.0).add_contact(&ps, &mut empty), 0);
}

#[test]
fn cable_constraint_normal_points_at_anchor() {
    let ps = vec![Particle::new(Vec3::new(0.0, -7.0, 0.0), 1.0).unwrap()];
    let mut contacts = vec![Contact::default(); 1];
    let cable = CableConstraint::new(0, Vec3::new(0.0, 0.0, 0.0), 5.0, 0.5);

    assert_eq!(cable.add_contact(&ps, &mut contacts), 1);
    assert_eq!(contacts[0].b, None);
    assert_relative_eq!(contacts[0].normal.y, 1.0, epsilon = 1e-12);
    assert_relative_eq!(contacts[0].normal.length(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(contacts[0].penetration, 2.0);
    assert_relative_eq!(contacts[0].restitution, 0.5);
}

#[test]
fn cable_constraint_within_reach_writes_nothing() {
    let ps = vec![Particle::new(Vec3::new(0.0, -3.0, 0.0), 1.0).unwrap()];
    let mut contacts = vec![Contact::default(); 1];
    let cable = CableConstraint::new(0, Vec3::zero(), 5.0, 0.5);
    assert_eq!(cable.add_contact(&ps, &mut contacts), 0);
}

#[test]
fn rod_constraint_flips_normal_when_compressed() {
    let anchor = Vec2::new(0.0, 10.0);
    let rod = RodConstraint::<V2>::new(0, anchor, 4.0);

    let stretched = vec![Particle::new(Vec2::new(0.0, 5.0), 1.0).unwrap()];
    let mut contacts = buffer(1);
    assert_eq!(rod.add_contact(&stretched, &mut contacts), 1);
    assert_normal(contacts[0].normal, Vec2::new(0.0, 1.0));
    assert_relative_eq!(contacts[0].penetration, 1.0);
    assert_relative_eq!(contacts[0].restitution, 0.0);

    let compressed = vec![Particle::new(Vec2::new(0.0, 7.0), 1.0).unwrap()];
    let mut contacts = buffer(1);
    assert_eq!(rod.add_contact(&compressed, &mut contacts), 1);
    assert_normal(contacts[0].normal, Vec2::new(0.0, -1.0));
    assert_relative_eq!(contacts[0].penetration, 1.0);
}

#[test]
fn negative_lengths_are_rejected() {
    assert_eq!(
        CableLink::<V2>::try_new(0, 1, -1.0, 0.0).unwrap_err(),
        PhysicsError::InvalidLength
    );
    assert!(RodLink::<V2>::try_new(0, 1, f64::NAN).is_err());
    assert!(CableConstraint::<V2>::try_new(0, Vec2::new(0.0, 0.0), -2.0, 0.0).is_err());
    assert!(RodConstraint::<V2>::try_new(0, Vec2::new(0.0, 0.0), 2.0).is_ok());
}

#[test]
fn ground_contacts_only_for_particles_below_ground() {
    let ps = vec![
        Particle::new(Vec2::new(0.0, -2.0), 1.0).unwrap(),
        Particle::new(Vec2::new(1.0, 1.0), 1.0).unwrap(),
        Particle::new(Vec2::new(2.0, -0.5), 1.0).unwrap(),
    ];
    let mut contacts = buffer(4);
    let ground: GroundContacts<V2> = GroundContacts::new();

    assert_eq!(ground.add_contact(&ps, &mut contacts), 2);
    assert_eq!(contacts[0].a, 0);
    assert_eq!(contacts[0].normal, Vec2::up());
    assert_relative_eq!(contacts[0].penetration, 2.0);
    assert_relative_eq!(contacts[0].restitution, 0.2, epsilon = 1e-6);
    assert_eq!(contacts[1].a, 2);
    assert_relative_eq!(contacts[1].penetration, 0.5);
}

#[test]
fn ground_contacts_stop_at_limit() {
    let ps: std::vec::Vec<Particle<Vec2<f64>>> = (0..5)
        .map(|i| Particle::new(Vec2::new(i as f64, -1.0), 1.0).unwrap())
        .collect();
    let mut contacts = buffer(2);
    let ground: GroundContacts<V2> = GroundContacts::new().with_restitution(0.0);
    assert_eq!(ground.add_contact(&ps, &mut contacts), 2);
    assert_eq!(contacts[1].a, 1);
}
