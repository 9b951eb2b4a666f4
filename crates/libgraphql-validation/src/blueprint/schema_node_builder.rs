use crate::Node;
use crate::NodeKind;
use crate::ast;
use crate::blueprint::type_ref;

/// Converts a schema (SDL) document AST into blueprint [`Node`]s.
pub(crate) struct SchemaNodeBuilder;
impl SchemaNodeBuilder {
    pub fn build(doc: &ast::schema::Document) -> Vec<Node> {
        use ast::schema::Definition;

        doc.definitions.iter()
            .map(|def| match def {
                Definition::SchemaDefinition(schema_def) =>
                    Self::visit_schema_definition(schema_def),
                Definition::TypeDefinition(type_def) =>
                    Self::visit_type_definition(type_def),
                Definition::TypeExtension(type_ext) =>
                    Self::visit_type_extension(type_ext),
                Definition::DirectiveDefinition(directive_def) =>
                    Self::visit_directive_definition(directive_def),
            })
            .collect()
    }

    fn visit_schema_definition(schema_def: &ast::schema::SchemaDefinition) -> Node {
        Node::new(NodeKind::SchemaDefinition)
            .with_location(schema_def.position)
            .with_attr("query", schema_def.query.clone())
            .with_attr("mutation", schema_def.mutation.clone())
            .with_attr("subscription", schema_def.subscription.clone())
    }

    fn visit_type_definition(type_def: &ast::schema::TypeDefinition) -> Node {
        use ast::schema::TypeDefinition;

        match type_def {
            TypeDefinition::Scalar(scalar_t) =>
                Node::new(NodeKind::ScalarTypeDefinition)
                    .with_location(scalar_t.position)
                    .with_attr("name", scalar_t.name.as_str()),

            TypeDefinition::Object(obj_t) =>
                Node::new(NodeKind::ObjectTypeDefinition)
                    .with_location(obj_t.position)
                    .with_attr("name", obj_t.name.as_str())
                    .with_attr("interfaces", obj_t.implements_interfaces.clone())
                    .with_children(obj_t.fields.iter().map(Self::visit_field)),

            TypeDefinition::Interface(iface_t) =>
                Node::new(NodeKind::InterfaceTypeDefinition)
                    .with_location(iface_t.position)
                    .with_attr("name", iface_t.name.as_str())
                    .with_attr("interfaces", iface_t.implements_interfaces.clone())
                    .with_children(iface_t.fields.iter().map(Self::visit_field)),

            TypeDefinition::Union(union_t) =>
                Node::new(NodeKind::UnionTypeDefinition)
                    .with_location(union_t.position)
                    .with_attr("name", union_t.name.as_str())
                    .with_attr("types", union_t.types.clone()),

            TypeDefinition::Enum(enum_t) =>
                Node::new(NodeKind::EnumTypeDefinition)
                    .with_location(enum_t.position)
                    .with_attr("name", enum_t.name.as_str())
                    .with_children(enum_t.values.iter().map(Self::visit_enum_value)),

            TypeDefinition::InputObject(inputobj_t) =>
                Node::new(NodeKind::InputObjectTypeDefinition)
                    .with_location(inputobj_t.position)
                    .with_attr("name", inputobj_t.name.as_str())
                    .with_children(inputobj_t.fields.iter().map(Self::visit_input_value)),
        }
    }

    fn visit_type_extension(type_ext: &ast::schema::TypeExtension) -> Node {
        use ast::schema::TypeExtension;

        let (extends, position, name, children): (_, _, _, Vec<Node>) =
            match type_ext {
                TypeExtension::Scalar(ext) =>
                    ("scalar", ext.position, &ext.name, vec![]),
                TypeExtension::Object(ext) => (
                    "type",
                    ext.position,
                    &ext.name,
                    ext.fields.iter().map(Self::visit_field).collect(),
                ),
                TypeExtension::Interface(ext) => (
                    "interface",
                    ext.position,
                    &ext.name,
                    ext.fields.iter().map(Self::visit_field).collect(),
                ),
                TypeExtension::Union(ext) =>
                    ("union", ext.position, &ext.name, vec![]),
                TypeExtension::Enum(ext) => (
                    "enum",
                    ext.position,
                    &ext.name,
                    ext.values.iter().map(Self::visit_enum_value).collect(),
                ),
                TypeExtension::InputObject(ext) => (
                    "input",
                    ext.position,
                    &ext.name,
                    ext.fields.iter().map(Self::visit_input_value).collect(),
                ),
            };

        Node::new(NodeKind::TypeExtension)
            .with_location(position)
            .with_attr("name", name.as_str())
            .with_attr("extends", extends)
            .with_children(children)
    }

    fn visit_directive_definition(
        directive_def: &ast::schema::DirectiveDefinition,
    ) -> Node {
        Node::new(NodeKind::DirectiveDefinition)
            .with_location(directive_def.position)
            .with_attr("name", directive_def.name.as_str())
            .with_attr("repeatable", directive_def.repeatable)
            .with_children(directive_def.arguments.iter().map(Self::visit_input_value))
    }

    fn visit_field(field: &ast::schema::Field) -> Node {
        Node::new(NodeKind::FieldDefinition)
            .with_location(field.position)
            .with_attr("name", field.name.as_str())
            .with_attr("type", type_ref::type_annotation_str(&field.field_type))
            .with_attr("type_name", type_ref::innermost_type_name(&field.field_type))
            .with_children(field.arguments.iter().map(Self::visit_input_value))
    }

    fn visit_input_value(input_value: &ast::schema::InputValue) -> Node {
        Node::new(NodeKind::InputValueDefinition)
            .with_location(input_value.position)
            .with_attr("name", input_value.name.as_str())
            .with_attr("type", type_ref::type_annotation_str(&input_value.value_type))
            .with_attr("type_name", type_ref::innermost_type_name(&input_value.value_type))
            .with_attr("has_default", input_value.default_value.is_some())
    }

    fn visit_enum_value(enum_value: &ast::schema::EnumValue) -> Node {
        Node::new(NodeKind::EnumValueDefinition)
            .with_location(enum_value.position)
            .with_attr("name", enum_value.name.as_str())
    }
}

