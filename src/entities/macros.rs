//! Macros for reducing boilerplate when defining entities
//!
//! These macros generate the repetitive code needed for a plain
//! `{ id, props }` record to take part in repositories and searches.

/// Declare an entity record wrapping a props struct
///
/// Generates:
/// - `struct $type { id: EntityId, props: $props }`
/// - `$type::new(props, id)` generating a UUID v4 when `id` is `None`
/// - `$type::props()` read access, plus a module-private `props_mut()` for
///   the entity's own update methods
/// - `Entity` with the `{ id, ...props }` snapshot
/// - `Serialize` rendering that same snapshot
///
/// `$props` must implement `Serialize`, `Clone`, `Debug`, `PartialEq`,
/// `Send` and `Sync`.
///
/// # Example
///
/// ```rust,ignore
/// use searchable::prelude::*;
///
/// #[derive(Debug, Clone, PartialEq, Serialize)]
/// pub struct ProductProps {
///     pub name: String,
///     pub price: f64,
/// }
///
/// impl_entity!(Product, ProductProps, "product");
///
/// let product = Product::new(ProductProps { name: "Pen".into(), price: 1.5 }, None);
/// assert!(product.id().is_valid_v4());
/// ```
#[macro_export]
macro_rules! impl_entity {
    ($type:ident, $props:ty, $entity_type:expr) => {
        #[derive(Debug, Clone, PartialEq)]
        pub struct $type {
            id: $crate::core::entity::EntityId,
            props: $props,
        }

        impl $type {
            /// Create the entity, generating an identifier when none is supplied
            pub fn new(props: $props, id: Option<$crate::core::entity::EntityId>) -> Self {
                Self {
                    id: id.unwrap_or_else($crate::core::entity::EntityId::generate),
                    props,
                }
            }

            /// Read access to the entity props
            pub fn props(&self) -> &$props {
                &self.props
            }

            #[allow(dead_code)]
            fn props_mut(&mut self) -> &mut $props {
                &mut self.props
            }
        }

        impl $crate::core::entity::Entity for $type {
            fn entity_type() -> &'static str {
                $entity_type
            }

            fn id(&self) -> &$crate::core::entity::EntityId {
                &self.id
            }

            fn to_json(&self) -> ::serde_json::Map<String, ::serde_json::Value> {
                $crate::core::entity::snapshot(&self.id, &self.props)
            }
        }

        impl ::serde::Serialize for $type {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                use $crate::core::entity::Entity as _;
                ::serde::Serialize::serialize(&self.to_json(), serializer)
            }
        }
    };
}
