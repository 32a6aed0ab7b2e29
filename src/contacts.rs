//! A contact directory kept in alphabetical order by name.
//!
//! # Examples
//!
//! ```
//! use bintree::contacts::{Contact, ContactBook};
//!
//! let mut book = ContactBook::new();
//! book.add_contact(Contact::new("Alice", "123-456-7890"));
//! book.add_contact(Contact::new("Bob", "234-567-8901"));
//!
//! let bob = book.find_contact("Bob").unwrap();
//! assert_eq!(bob.to_string(), "Bob: 234-567-8901");
//! ```

use std::fmt;

use crate::ordered::Tree;

/// A name and a phone number. The name identifies the contact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contact {
    /// Unique within a [`ContactBook`].
    pub name: String,
    /// Free-form phone number.
    pub phone: String,
}

impl Contact {
    /// Creates a contact.
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.phone)
    }
}

/// Contacts keyed by name.
#[derive(Clone, Debug, Default)]
pub struct ContactBook {
    contacts: Tree<String, Contact>,
}

impl ContactBook {
    /// Creates an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the contact unless one with the same name is already present.
    pub fn add_contact(&mut self, contact: Contact) -> bool {
        self.contacts.insert(contact.name.clone(), contact)
    }

    /// Looks a contact up by name.
    pub fn find_contact(&self, name: &str) -> Option<&Contact> {
        self.contacts.find(name)
    }

    /// Removes the contact with the given name, returning whether there was one.
    pub fn delete_contact(&mut self, name: &str) -> bool {
        self.contacts.delete(name)
    }

    /// Every contact in alphabetical order of name.
    pub fn list_contacts(&self) -> Vec<&Contact> {
        self.contacts.iter().map(|(_, contact)| contact).collect()
    }

    /// The number of contacts.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the book has no contacts.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}
