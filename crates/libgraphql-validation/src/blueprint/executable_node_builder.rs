use crate::AttrValue;
use crate::Node;
use crate::NodeKind;
use crate::ast;
use crate::blueprint::type_ref;
use crate::loc::SourceLocation;

/// Converts an executable document AST into blueprint [`Node`]s.
pub(crate) struct ExecutableNodeBuilder;
impl ExecutableNodeBuilder {
    pub fn build(doc: &ast::query::Document) -> Vec<Node> {
        doc.definitions.iter()
            .map(|def| match def {
                ast::query::Definition::Operation(op) => Self::visit_operation(op),
                ast::query::Definition::Fragment(frag) => Self::visit_fragment(frag),
            })
            .collect()
    }

    fn visit_operation(op: &ast::query::OperationDefinition) -> Node {
        use ast::query::OperationDefinition as OpDef;

        let (operation, position, name, var_defs, directives, selection_set) =
            match op {
                OpDef::SelectionSet(selection_set) => (
                    "query",
                    selection_set.span.0,
                    None,
                    &[][..],
                    &[][..],
                    selection_set,
                ),
                OpDef::Query(query) => (
                    "query",
                    query.position,
                    query.name.as_ref(),
                    query.variable_definitions.as_slice(),
                    query.directives.as_slice(),
                    &query.selection_set,
                ),
                OpDef::Mutation(mutation) => (
                    "mutation",
                    mutation.position,
                    mutation.name.as_ref(),
                    mutation.variable_definitions.as_slice(),
                    mutation.directives.as_slice(),
                    &mutation.selection_set,
                ),
                OpDef::Subscription(subscription) => (
                    "subscription",
                    subscription.position,
                    subscription.name.as_ref(),
                    subscription.variable_definitions.as_slice(),
                    subscription.directives.as_slice(),
                    &subscription.selection_set,
                ),
            };

        Node::new(NodeKind::OperationDefinition)
            .with_location(position)
            .with_attr("name", name.cloned())
            .with_attr("operation", operation)
            .with_children(var_defs.iter().map(Self::visit_variable_definition))
            .with_children(directives.iter().map(Self::visit_directive))
            .with_children(Self::visit_selection_set(selection_set))
    }

    fn visit_fragment(frag: &ast::query::FragmentDefinition) -> Node {
        let ast::query::TypeCondition::On(type_condition) = &frag.type_condition;
        Node::new(NodeKind::Fragment)
            .with_location(frag.position)
            .with_attr("name", frag.name.as_str())
            .with_attr("type_condition", type_condition.as_str())
            .with_children(frag.directives.iter().map(Self::visit_directive))
            .with_children(Self::visit_selection_set(&frag.selection_set))
    }

    fn visit_variable_definition(var_def: &ast::query::VariableDefinition) -> Node {
        Node::new(NodeKind::VariableDefinition)
            .with_location(var_def.position)
            .with_attr("name", var_def.name.as_str())
            .with_attr("type", type_ref::type_annotation_str(&var_def.var_type))
            .with_attr("has_default", var_def.default_value.is_some())
    }

    fn visit_directive(directive: &ast::query::Directive) -> Node {
        let location = SourceLocation::from(directive.position);
        Node::new(NodeKind::Directive)
            .with_location(location)
            .with_attr("name", directive.name.as_str())
            .with_children(Self::visit_arguments(&directive.arguments, location))
    }

    /// `graphql_parser` does not track positions for arguments, so each
    /// argument node is located at the field or directive that owns it.
    fn visit_arguments(
        arguments: &[(String, ast::query::Value)],
        owner_location: SourceLocation,
    ) -> Vec<Node> {
        arguments.iter()
            .map(|(name, _value)| {
                Node::new(NodeKind::Argument)
                    .with_location(owner_location)
                    .with_attr("name", name.as_str())
            })
            .collect()
    }

    fn visit_selection_set(selection_set: &ast::query::SelectionSet) -> Vec<Node> {
        selection_set.items.iter()
            .map(|selection| match selection {
                ast::query::Selection::Field(field) => Self::visit_field(field),

                ast::query::Selection::FragmentSpread(spread) =>
                    Node::new(NodeKind::FragmentSpread)
                        .with_location(spread.position)
                        .with_attr("name", spread.fragment_name.as_str())
                        .with_children(spread.directives.iter().map(Self::visit_directive)),

                ast::query::Selection::InlineFragment(inline_frag) => {
                    let type_condition =
                        inline_frag.type_condition
                            .as_ref()
                            .map(|ast::query::TypeCondition::On(name)| name.as_str());
                    Node::new(NodeKind::InlineFragment)
                        .with_location(inline_frag.position)
                        .with_attr("type_condition", AttrValue::from(type_condition))
                        .with_children(inline_frag.directives.iter().map(Self::visit_directive))
                        .with_children(Self::visit_selection_set(&inline_frag.selection_set))
                },
            })
            .collect()
    }

    fn visit_field(field: &ast::query::Field) -> Node {
        let location = SourceLocation::from(field.position);
        Node::new(NodeKind::Field)
            .with_location(location)
            .with_attr("name", field.name.as_str())
            .with_attr("alias", field.alias.clone())
            .with_children(Self::visit_arguments(&field.arguments, location))
            .with_children(field.directives.iter().map(Self::visit_directive))
            .with_children(Self::visit_selection_set(&field.selection_set))
    }
}
