use crate::Blueprint;
use crate::Node;
use crate::NodeKind;
use crate::Pipeline;
use crate::PipelineOptions;
use crate::phases::ParseSchema;
use crate::schema::OperationKind;
use crate::schema::SchemaError;
use indexmap::IndexMap;

/// A schema that executable documents can be validated against.
///
/// This is nothing more than the [`Blueprint`] produced by running an SDL
/// document through [`Pipeline::for_schema`] (which is only accepted if no
/// validation rule found a problem with it) plus an index of type names to
/// make lookups cheap.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    blueprint: Blueprint,
    mutation_type: Option<String>,
    query_type: Option<String>,
    subscription_type: Option<String>,

    /// Maps each type name to the indices of the root-level nodes that define
    /// or extend it.
    types: IndexMap<String, Vec<usize>>,
}

impl Schema {
    pub const BUILTIN_SCALARS: [&'static str; 5] = [
        "Boolean",
        "Float",
        "ID",
        "Int",
        "String",
    ];

    pub fn parse(sdl: &str) -> Result<Self, SchemaError> {
        let blueprint =
            Pipeline::for_schema(PipelineOptions::default())
                .run(sdl)
                .into_blueprint();

        if let Some(parse_error) =
            blueprint.root()
                .errors()
                .iter()
                .find(|err| err.phase() == ParseSchema::ID) {
            return Err(SchemaError::Parse {
                message: parse_error.message().to_string(),
            });
        }

        let mut messages = vec![];
        blueprint.root().prewalk(&mut |node| {
            messages.extend(node.errors().iter().map(|err| err.message().to_string()));
        });
        if !messages.is_empty() {
            return Err(SchemaError::Invalid { messages });
        }

        Ok(Self::from_blueprint(blueprint))
    }

    fn from_blueprint(blueprint: Blueprint) -> Self {
        let mut types: IndexMap<String, Vec<usize>> = IndexMap::new();
        for (idx, node) in blueprint.root().children().iter().enumerate() {
            let defines_type =
                node.kind().is_type_definition()
                    || node.kind() == NodeKind::TypeExtension;
            if defines_type && let Some(name) = node.name() {
                types.entry(name.to_string()).or_default().push(idx);
            }
        }

        let schema_def = blueprint.definitions(NodeKind::SchemaDefinition).next();
        let root_type_name = |attr: &str, default: &str| -> Option<String> {
            match schema_def {
                Some(schema_def) =>
                    schema_def.attr(attr)
                        .and_then(|value| value.as_str())
                        .map(str::to_string),
                None if types.contains_key(default) => Some(default.to_string()),
                None => None,
            }
        };
        let query_type = root_type_name("query", "Query");
        let mutation_type = root_type_name("mutation", "Mutation");
        let subscription_type = root_type_name("subscription", "Subscription");

        Self {
            blueprint,
            mutation_type,
            query_type,
            subscription_type,
            types,
        }
    }

    pub fn blueprint(&self) -> &Blueprint {
        &self.blueprint
    }

    /// Looks up the named type of the `field_name` field on an object or
    /// interface type, with list and non-null wrappers stripped off.
    pub fn field_type(&self, type_name: &str, field_name: &str) -> Option<&str> {
        self.type_nodes(type_name)
            .flat_map(|type_node| type_node.children())
            .find(|field| {
                field.kind() == NodeKind::FieldDefinition
                    && field.name() == Some(field_name)
            })
            .and_then(|field| field.attr("type_name"))
            .and_then(|type_name| type_name.as_str())
    }

    pub fn has_type(&self, name: &str) -> bool {
        Self::BUILTIN_SCALARS.contains(&name) || self.types.contains_key(name)
    }

    /// True for object, interface, and union types: the types that can have
    /// selection sets.
    pub fn is_composite(&self, name: &str) -> bool {
        self.type_definition(name).is_some_and(|node| matches!(
            node.kind(),
            NodeKind::InterfaceTypeDefinition
                | NodeKind::ObjectTypeDefinition
                | NodeKind::UnionTypeDefinition
        ))
    }

    pub fn root_type(&self, kind: OperationKind) -> Option<&str> {
        match kind {
            OperationKind::Mutation => self.mutation_type.as_deref(),
            OperationKind::Query => self.query_type.as_deref(),
            OperationKind::Subscription => self.subscription_type.as_deref(),
        }
    }

    /// The node that defines (rather than extends) the named type.
    pub fn type_definition(&self, name: &str) -> Option<&Node> {
        self.type_nodes(name).find(|node| node.kind().is_type_definition())
    }

    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    fn type_nodes(&self, name: &str) -> impl Iterator<Item = &Node> {
        let root_children = self.blueprint.root().children();
        self.types.get(name)
            .into_iter()
            .flatten()
            .map(move |idx| &root_children[*idx])
    }
}
