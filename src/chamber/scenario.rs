//! The fixed scenario catalog.
//!
//! Field is into the page and the reference motion is upward, so a left turn
//! means positive charge and a right turn negative. Line width stands in for
//! ionization. The proton and the mu+ share geometry on purpose: only the
//! width tells them apart.

use std::f32::consts::PI;
use std::fmt;

use super::curves::{Arc, CurveError, Rotation, Spiral};
use super::world::Point;

const SPIRAL_SAMPLES: usize = 500;
const MUON_ARC_SAMPLES: usize = 160;
const PAIR_ARC_SAMPLES: usize = 120;

/// The seven answers, in the order the game lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Particle {
    Electron,
    Positron,
    MuonMinus,
    MuonPlus,
    PhotonPair,
    Proton,
    Neutron,
}

impl Particle {
    pub fn all() -> &'static [Particle] {
        &[
            Particle::Electron,
            Particle::Positron,
            Particle::MuonMinus,
            Particle::MuonPlus,
            Particle::PhotonPair,
            Particle::Proton,
            Particle::Neutron,
        ]
    }

    /// Canonical answer label. Scoring compares these exactly.
    pub fn label(&self) -> &'static str {
        match self {
            Particle::Electron => "electron (e−)",
            Particle::Positron => "positron (e+)",
            Particle::MuonMinus => "muon (μ−)",
            Particle::MuonPlus => "muon (μ+)",
            Particle::PhotonPair => "photon (γ) → e⁺e⁻ pair",
            Particle::Proton => "proton (p)",
            Particle::Neutron => "neutron (n) (no visible primary track)",
        }
    }

    #[cfg(test)]
    pub fn from_label(label: &str) -> Option<Particle> {
        Particle::all().iter().copied().find(|p| p.label() == label)
    }

    pub fn index(&self) -> usize {
        match self {
            Particle::Electron => 0,
            Particle::Positron => 1,
            Particle::MuonMinus => 2,
            Particle::MuonPlus => 3,
            Particle::PhotonPair => 4,
            Particle::Proton => 5,
            Particle::Neutron => 6,
        }
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
    Neutral,
}

impl Sign {
    pub fn symbol(&self) -> char {
        match self {
            Sign::Positive => '+',
            Sign::Negative => '-',
            Sign::Neutral => '0',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curvature {
    Tight,
    Gentle,
    Pair,
    None,
}

impl Curvature {
    pub fn name(&self) -> &'static str {
        match self {
            Curvature::Tight => "tight",
            Curvature::Gentle => "gentle",
            Curvature::Pair => "pair",
            Curvature::None => "none",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ionization {
    Faint,
    Thin,
    Thick,
    None,
}

impl Ionization {
    pub fn name(&self) -> &'static str {
        match self {
            Ionization::Faint => "faint",
            Ionization::Thin => "thin",
            Ionization::Thick => "thick",
            Ionization::None => "none",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Special {
    Conversion,
}

impl Special {
    pub fn name(&self) -> &'static str {
        match self {
            Special::Conversion => "conversion",
        }
    }
}

/// Hint metadata. Never affects drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tags {
    pub sign: Sign,
    pub curvature: Curvature,
    pub ionization: Ionization,
    pub special: Option<Special>,
}

impl Tags {
    /// Plain-language clue phrases, e.g. "turns left (+), gentle curvature".
    pub fn clues(&self) -> String {
        if self.special == Some(Special::Conversion) {
            return "conversion V with opposite curvature".to_string();
        }
        let mut bits = Vec::with_capacity(3);
        bits.push(
            match self.sign {
                Sign::Positive => "turns left (+)",
                Sign::Negative => "turns right (−)",
                Sign::Neutral => "neutral (no primary)",
            }
            .to_string(),
        );
        bits.push(format!("{} curvature", self.curvature.name()));
        if self.ionization != Ionization::None {
            bits.push(format!("{} ionization", self.ionization.name()));
        }
        bits.join(", ")
    }

    /// Compact `key=value` form of the tag set.
    pub fn summary(&self) -> String {
        let mut s = format!(
            "sign={}, curvature={}, ionization={}",
            self.sign.symbol(),
            self.curvature.name(),
            self.ionization.name()
        );
        if let Some(special) = self.special {
            s.push_str(&format!(", special={}", special.name()));
        }
        s
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stroke {
    Thin,
    Thick,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Spiral(Spiral),
    Arc(Arc),
    /// Two opposite-curving arms from a shared vertex, no incoming track.
    ConversionV { vertex: Point, arms: [Arc; 2] },
    Nothing,
}

/// A sampled curve ready to rasterize.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub points: Vec<Point>,
    pub stroke: Stroke,
}

/// Everything a scenario puts on the canvas, in world space.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Drawing {
    pub tracks: Vec<Track>,
    pub vertex: Option<Point>,
}

impl Drawing {
    pub fn point_count(&self) -> usize {
        self.tracks.iter().map(|t| t.points.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub answer: Particle,
    pub explanation: &'static str,
    pub tags: Tags,
    pub geometry: Geometry,
    pub stroke: Stroke,
}

impl Scenario {
    /// Sample this scenario's geometry into tracks.
    pub fn drawing(&self) -> Result<Drawing, CurveError> {
        let stroke = self.stroke;
        let drawing = match &self.geometry {
            Geometry::Spiral(spiral) => Drawing {
                tracks: vec![Track { points: spiral.points()?, stroke }],
                vertex: None,
            },
            Geometry::Arc(arc) => Drawing {
                tracks: vec![Track { points: arc.points()?, stroke }],
                vertex: None,
            },
            Geometry::ConversionV { vertex, arms } => Drawing {
                tracks: arms
                    .iter()
                    .map(|arm| Ok(Track { points: arm.points()?, stroke }))
                    .collect::<Result<_, CurveError>>()?,
                vertex: Some(*vertex),
            },
            Geometry::Nothing => Drawing::default(),
        };
        Ok(drawing)
    }
}

fn tags(sign: Sign, curvature: Curvature, ionization: Ionization) -> Tags {
    Tags { sign, curvature, ionization, special: None }
}

/// Gentle left arc through the origin; shared by the mu+ and the proton.
fn gentle_left_arc() -> Arc {
    Arc {
        center: Point::new(-20.0, 0.0),
        radius: 20.0,
        start: 0.0,
        end: 0.5,
        rotation: Rotation::CounterClockwise,
        samples: MUON_ARC_SAMPLES,
    }
}

/// Build the seven scenarios. Cheap; screens rebuild it when they open.
pub fn catalog() -> Vec<Scenario> {
    let r_start = 3.0;
    let r_end = 0.6;
    let pair_r = 6.0;

    vec![
        Scenario {
            answer: Particle::Positron,
            explanation: "Left-curving tight spiral ⇒ low-p, positive, light → e⁺.",
            tags: tags(Sign::Positive, Curvature::Tight, Ionization::Faint),
            geometry: Geometry::Spiral(Spiral {
                center: Point::new(-r_start, 0.0),
                r_start,
                r_end,
                turns: 3.2,
                rotation: Rotation::CounterClockwise,
                samples: SPIRAL_SAMPLES,
                start_angle: 0.0,
            }),
            stroke: Stroke::Thin,
        },
        Scenario {
            answer: Particle::Electron,
            explanation: "Right-curving tight spiral ⇒ low-p, negative, very light → e⁻.",
            tags: tags(Sign::Negative, Curvature::Tight, Ionization::Faint),
            geometry: Geometry::Spiral(Spiral {
                center: Point::new(r_start, 0.0),
                r_start,
                r_end,
                turns: 3.2,
                rotation: Rotation::Clockwise,
                samples: SPIRAL_SAMPLES,
                start_angle: PI,
            }),
            stroke: Stroke::Thin,
        },
        Scenario {
            answer: Particle::MuonMinus,
            explanation: "Long gentle right arc; thin ionization → high-p negative MIP → μ⁻.",
            tags: tags(Sign::Negative, Curvature::Gentle, Ionization::Thin),
            geometry: Geometry::Arc(Arc {
                center: Point::new(20.0, 0.0),
                radius: 20.0,
                start: PI,
                end: PI - 0.5,
                rotation: Rotation::Clockwise,
                samples: MUON_ARC_SAMPLES,
            }),
            stroke: Stroke::Thin,
        },
        Scenario {
            answer: Particle::MuonPlus,
            explanation: "Long gentle left arc; thin ionization → high-p positive MIP → μ⁺.",
            tags: tags(Sign::Positive, Curvature::Gentle, Ionization::Thin),
            geometry: Geometry::Arc(gentle_left_arc()),
            stroke: Stroke::Thin,
        },
        Scenario {
            answer: Particle::Proton,
            explanation: "Left gentle arc with heavy dE/dx (thick) → slow heavy positive → proton.",
            tags: tags(Sign::Positive, Curvature::Gentle, Ionization::Thick),
            geometry: Geometry::Arc(gentle_left_arc()),
            stroke: Stroke::Thick,
        },
        Scenario {
            answer: Particle::PhotonPair,
            explanation: "No incoming track; displaced V with opposite-curving faint arms → γ conversion to e⁺e⁻.",
            tags: Tags {
                sign: Sign::Neutral,
                curvature: Curvature::Pair,
                ionization: Ionization::Faint,
                special: Some(Special::Conversion),
            },
            geometry: Geometry::ConversionV {
                vertex: Point::ORIGIN,
                arms: [
                    Arc {
                        center: Point::new(-pair_r, 0.0),
                        radius: pair_r,
                        start: 0.0,
                        end: 0.9,
                        rotation: Rotation::CounterClockwise,
                        samples: PAIR_ARC_SAMPLES,
                    },
                    Arc {
                        center: Point::new(pair_r, 0.0),
                        radius: pair_r,
                        start: PI,
                        end: PI - 0.9,
                        rotation: Rotation::Clockwise,
                        samples: PAIR_ARC_SAMPLES,
                    },
                ],
            },
            stroke: Stroke::Thin,
        },
        Scenario {
            answer: Particle::Neutron,
            explanation: "No charged track; neutral particle. (Sometimes a short recoil stub.)",
            tags: tags(Sign::Neutral, Curvature::None, Ionization::None),
            geometry: Geometry::Nothing,
            stroke: Stroke::Thin,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn find(particle: Particle) -> Scenario {
        catalog().into_iter().find(|s| s.answer == particle).unwrap()
    }

    #[test]
    fn test_catalog_has_each_answer_once() {
        let scenarios = catalog();
        assert_eq!(scenarios.len(), 7);
        let labels: HashSet<&str> = scenarios.iter().map(|s| s.answer.label()).collect();
        let canonical: HashSet<&str> = [
            "electron (e−)",
            "positron (e+)",
            "muon (μ−)",
            "muon (μ+)",
            "photon (γ) → e⁺e⁻ pair",
            "proton (p)",
            "neutron (n) (no visible primary track)",
        ]
        .into_iter()
        .collect();
        assert_eq!(labels, canonical);
    }

    #[test]
    fn test_label_round_trip_and_order() {
        for (i, p) in Particle::all().iter().enumerate() {
            assert_eq!(p.index(), i);
            assert_eq!(Particle::from_label(p.label()), Some(*p));
        }
        assert_eq!(Particle::from_label("proton"), None);
        assert_eq!(Particle::from_label(""), None);
    }

    #[test]
    fn test_every_geometry_samples() {
        for s in catalog() {
            assert!(s.drawing().is_ok(), "{} failed to sample", s.answer);
        }
    }

    #[test]
    fn test_neutron_draws_nothing() {
        let drawing = find(Particle::Neutron).drawing().unwrap();
        assert_eq!(drawing.point_count(), 0);
        assert!(drawing.vertex.is_none());
    }

    #[test]
    fn test_proton_and_mu_plus_differ_only_in_width() {
        let proton = find(Particle::Proton);
        let mu = find(Particle::MuonPlus);
        assert_eq!(proton.geometry, mu.geometry);
        assert_eq!(proton.stroke, Stroke::Thick);
        assert_eq!(mu.stroke, Stroke::Thin);
    }

    #[test]
    fn test_tracks_start_at_origin_and_turn_by_charge() {
        for s in catalog() {
            let drawing = s.drawing().unwrap();
            let Some(track) = drawing.tracks.first() else { continue };
            assert!(track.points[0].distance(Point::ORIGIN) < 1e-4, "{}", s.answer);
            let probe = track.points[20];
            match s.tags.sign {
                Sign::Positive => assert!(probe.x < 0.0, "{}", s.answer),
                Sign::Negative => assert!(probe.x > 0.0, "{}", s.answer),
                Sign::Neutral => {}
            }
        }
    }

    #[test]
    fn test_conversion_has_two_opposite_arms() {
        let drawing = find(Particle::PhotonPair).drawing().unwrap();
        assert_eq!(drawing.tracks.len(), 2);
        assert_eq!(drawing.vertex, Some(Point::ORIGIN));
        let left = drawing.tracks[0].points.last().unwrap();
        let right = drawing.tracks[1].points.last().unwrap();
        assert!(left.x < 0.0 && right.x > 0.0);
    }

    #[test]
    fn test_tracks_stay_inside_world() {
        for s in catalog() {
            for track in s.drawing().unwrap().tracks {
                for p in track.points {
                    assert!(p.x.abs() <= 10.0 && p.y.abs() <= 10.0, "{} leaves the world", s.answer);
                }
            }
        }
    }

    #[test]
    fn test_tag_text() {
        let proton = find(Particle::Proton).tags;
        assert_eq!(proton.clues(), "turns left (+), gentle curvature, thick ionization");
        assert_eq!(proton.summary(), "sign=+, curvature=gentle, ionization=thick");

        let photon = find(Particle::PhotonPair).tags;
        assert_eq!(photon.clues(), "conversion V with opposite curvature");
        assert!(photon.summary().ends_with(", special=conversion"));

        let neutron = find(Particle::Neutron).tags;
        assert_eq!(neutron.clues(), "neutral (no primary), none curvature");
    }
}
