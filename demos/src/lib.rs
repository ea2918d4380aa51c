// Copyright 2026 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for the Coppice demos.
//!
//! The sample data models a small database explorer: servers containing
//! databases, schemas, tables, and columns. The payload type carries the
//! kind of presentation metadata a real explorer hangs off each row; the
//! outline itself never looks inside it.

use coppice_outline::Node;

/// Icon shown beside a row.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Icon {
    Server,
    Cloud,
    Database,
    Disk,
    Folder,
    Table,
    Column,
}

impl Icon {
    /// A terminal-friendly stand-in for the icon.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Server => "srv",
            Self::Cloud => "cld",
            Self::Database => "db",
            Self::Disk => "dsk",
            Self::Folder => "dir",
            Self::Table => "tbl",
            Self::Column => "col",
        }
    }
}

/// Presentation metadata carried as the node payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Meta {
    /// Icon for the row.
    pub icon: Icon,
    /// Rendered grayed out and inert.
    pub disabled: bool,
    /// Shown in place of children when the row is open but has none.
    pub empty_hint: Option<&'static str>,
}

impl Meta {
    /// Metadata with just an icon.
    pub const fn icon(icon: Icon) -> Self {
        Self {
            icon,
            disabled: false,
            empty_hint: None,
        }
    }
}

fn leaf(name: &str, icon: Icon) -> Node<Meta> {
    Node::new(name, Meta::icon(icon))
}

fn table(name: &str, columns: &[&str]) -> Node<Meta> {
    Node::with_children(
        name,
        Meta::icon(Icon::Table),
        columns
            .iter()
            .map(|&column| leaf(column, Icon::Column))
            .collect(),
    )
}

/// The explorer sample: two live servers and one offline one.
pub fn database_tree() -> Vec<Node<Meta>> {
    vec![
        Node::with_children(
            "Production Server",
            Meta::icon(Icon::Server),
            vec![
                Node::with_children(
                    "PostgreSQL",
                    Meta::icon(Icon::Database),
                    vec![
                        Node::new(
                            "public",
                            Meta {
                                icon: Icon::Folder,
                                disabled: false,
                                empty_hint: Some("this schema is empty; add a table to get started"),
                            },
                        ),
                        Node::with_children(
                            "analytics",
                            Meta::icon(Icon::Folder),
                            vec![
                                table("events", &["event_id", "timestamp", "type", "data"]),
                                table("metrics", &["metric_id", "value", "timestamp"]),
                            ],
                        ),
                    ],
                ),
                Node::with_children(
                    "MySQL",
                    Meta::icon(Icon::Database),
                    vec![Node::with_children(
                        "app_db",
                        Meta::icon(Icon::Folder),
                        vec![
                            table("sessions", &["session_id", "user_id", "expires_at"]),
                            table("cache", &["key", "value", "expires_at"]),
                        ],
                    )],
                ),
            ],
        ),
        Node::with_children(
            "Development Server",
            Meta::icon(Icon::Server),
            vec![Node::with_children(
                "SQLite",
                Meta::icon(Icon::Disk),
                vec![Node::with_children(
                    "test.db",
                    Meta::icon(Icon::Database),
                    vec![table("test_table", &["id", "data"])],
                )],
            )],
        ),
        Node::new(
            "Cloud Server (Offline)",
            Meta {
                icon: Icon::Cloud,
                disabled: true,
                empty_hint: Some("currently offline; reconnect to browse"),
            },
        ),
    ]
}

/// A fresh table the way the explorer's "add table" affordance builds one.
///
/// `number` is one past the parent's current child count, so repeated adds
/// produce `new_table_1`, `new_table_2`, and so on.
pub fn new_table(number: usize) -> Node<Meta> {
    table(&format!("new_table_{number}"), &["id", "created_at"])
}
