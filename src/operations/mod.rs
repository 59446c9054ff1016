//! GraphQL request definitions.
//!
//! Each operation is a unit type binding a document to its variables and the
//! shape of its root field. Field lists mirror the backend schema exactly.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::controller::Inquiry;
use crate::models::{Paginated, Record};

pub mod admin;

pub use admin::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
}

/// A named GraphQL operation with typed input and output
pub trait Operation: Send + Sync + 'static {
    /// Operation name sent as `operationName`
    const NAME: &'static str;
    /// Field under `data` holding the result
    const ROOT_FIELD: &'static str;
    const KIND: OperationKind;
    const DOCUMENT: &'static str;

    type Variables: Serialize + Send + Sync;
    type Output: DeserializeOwned + Send;
}

/// Variables wrapper: every admin operation takes a single `$input`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Input<T> {
    pub input: T,
}

impl<T> Input<T> {
    pub fn new(input: T) -> Self {
        Self { input }
    }
}

/// Paginated list query driven by an [`Inquiry`]
pub trait ListQuery: Operation<Variables = Input<Inquiry>> {
    type Record: Record;

    fn into_page(output: Self::Output) -> Paginated<Self::Record>;
}

macro_rules! operation {
    (
        $(#[$meta:meta])*
        $name:ident: $kind:ident $root:literal, $vars:ty => $output:ty,
        $document:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl $crate::operations::Operation for $name {
            const NAME: &'static str = stringify!($name);
            const ROOT_FIELD: &'static str = $root;
            const KIND: $crate::operations::OperationKind =
                $crate::operations::OperationKind::$kind;
            const DOCUMENT: &'static str = $document;

            type Variables = $vars;
            type Output = $output;
        }
    };
}

macro_rules! list_query {
    (
        $(#[$meta:meta])*
        $name:ident $root:literal => $record:ty,
        $document:expr
    ) => {
        operation! {
            $(#[$meta])*
            $name: Query $root, $crate::operations::Input<$crate::controller::Inquiry>
                => $crate::models::Paginated<$record>,
            $document
        }

        impl $crate::operations::ListQuery for $name {
            type Record = $record;

            fn into_page(output: Self::Output) -> $crate::models::Paginated<$record> {
                output
            }
        }
    };
}

pub(crate) use {list_query, operation};
