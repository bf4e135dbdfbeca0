use serde::Serialize;

/// One step of the line: a single stage, or a split into parallel lanes
/// that merge back into the next step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FlowStep {
    Stage { name: &'static str },
    Split { lanes: &'static [&'static [&'static str]] },
}

/// Fixed topology of the finishing line.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProductionLine {
    steps: &'static [FlowStep],
    highlighted: &'static [&'static str],
}

pub static PRODUCTION_LINE: ProductionLine = ProductionLine {
    steps: &[
        FlowStep::Stage { name: "Magazzino Merce a Disporre" },
        FlowStep::Stage { name: "Arrotolatura" },
        FlowStep::Stage { name: "Bruciapelo" },
        FlowStep::Stage { name: "Stoccaggio per maturazione" },
        FlowStep::Stage { name: "Candeggio Naturale / Lavaggio" },
        FlowStep::Split {
            lanes: &[
                &["Bianco ottico", "Ram", "Garze"],
                &["Tintoria Foulard", "Stoccaggio", "Lavaggio"],
            ],
        },
        FlowStep::Stage { name: "Asciugamento per finissaggio" },
        FlowStep::Stage { name: "Garzatrice" },
        FlowStep::Stage { name: "Ram Finissaggio" },
        FlowStep::Split {
            lanes: &[&["Calandra"], &["Falda"]],
        },
        FlowStep::Stage { name: "Specola/Piegatrice/Conf Pez." },
        FlowStep::Stage { name: "Spedizione" },
    ],
    highlighted: &["Ram", "Ram Finissaggio", "Asciugamento per finissaggio"],
};

impl ProductionLine {
    pub fn steps(&self) -> &'static [FlowStep] {
        self.steps
    }

    /// Every stage, top to bottom; lanes of a split are listed lane by lane.
    pub fn stage_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        for step in self.steps {
            match step {
                FlowStep::Stage { name } => names.push(*name),
                FlowStep::Split { lanes } => {
                    names.extend(lanes.iter().flat_map(|lane| lane.iter().copied()))
                }
            }
        }
        names
    }

    /// Directed material-flow edges `(from, to)`.
    ///
    /// The stage before a split feeds the head of every lane, and the tail of
    /// every lane feeds the stage after it.
    pub fn edges(&self) -> Vec<(&'static str, &'static str)> {
        let mut edges = Vec::new();
        let mut tails: Vec<&'static str> = Vec::new();

        for step in self.steps {
            match step {
                FlowStep::Stage { name } => {
                    edges.extend(tails.iter().map(|t| (*t, *name)));
                    tails = vec![*name];
                }
                FlowStep::Split { lanes } => {
                    let mut lane_tails = Vec::with_capacity(lanes.len());
                    for lane in lanes.iter() {
                        let mut prev = tails.clone();
                        for stage in lane.iter() {
                            edges.extend(prev.iter().map(|p| (*p, *stage)));
                            prev = vec![*stage];
                        }
                        lane_tails.extend(prev);
                    }
                    tails = lane_tails;
                }
            }
        }
        edges
    }

    pub fn is_highlighted(&self, name: &str) -> bool {
        self.highlighted.iter().any(|h| *h == name)
    }

    pub fn highlighted(&self) -> &'static [&'static str] {
        self.highlighted
    }

    pub fn contains(&self, name: &str) -> bool {
        self.steps.iter().any(|step| match step {
            FlowStep::Stage { name: stage } => *stage == name,
            FlowStep::Split { lanes } => lanes
                .iter()
                .flat_map(|lane| lane.iter())
                .any(|stage| *stage == name),
        })
    }
}
