use arbor_core::{Graph, GraphError, GraphSource, GraphSourceError, NamedGraph};

/// Entry stored by [`ScriptedSource`]: either a graph or the error to return.
pub enum Scripted {
    Graph(&'static str, usize, Vec<(usize, usize, u32)>),
    Broken(GraphSourceError),
}

/// [`GraphSource`] that replays a fixed script of entries.
pub struct ScriptedSource {
    entries: Vec<Scripted>,
}

impl ScriptedSource {
    #[must_use]
    pub fn new(entries: Vec<Scripted>) -> Self {
        Self { entries }
    }
}

impl GraphSource for ScriptedSource {
    fn name(&self) -> &str {
        "scripted"
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn load(&self, index: usize) -> Result<NamedGraph, GraphSourceError> {
        match self.entries.get(index) {
            Some(Scripted::Graph(name, vertices, edges)) => {
                let graph = Graph::from_edges(*vertices, edges.iter().copied()).map_err(
                    |error: GraphError| GraphSourceError::InvalidEdge {
                        entry: (*name).to_owned(),
                        edge: 0,
                        error,
                    },
                )?;
                Ok(NamedGraph::new(*name, graph))
            }
            Some(Scripted::Broken(error)) => Err(error.clone()),
            None => Err(GraphSourceError::OutOfBounds { index }),
        }
    }
}
