//! The class-name builder and its bound stages.
//!
//! Binding happens in stages, each owning the segments supplied so far:
//!
//! | Stage     | `class()`      | `with(mods)`              |
//! |-----------|----------------|---------------------------|
//! | `Block`   | `block`        | `block -m1 -m2`           |
//! | `Element` | `block__elem`  | `block__elem -m1 -m2`     |
//!
//! `Abem::call` maps the five call shapes of [`Call`] onto these stages.

use crate::args::Call;
use crate::case::to_camel_case;
use crate::conventions::Conventions;
use crate::error::AbemError;
use crate::modifiers::Modifiers;
use crate::value::Value;
use std::fmt;

/// Build a class string from resolved parts.
///
/// This is the pure construction step: no validation, no binding. The
/// identifier comes first, followed by one prefixed class per active
/// modifier, all joined by single spaces.
pub fn class_name(
    conventions: &Conventions,
    block: &str,
    elem: Option<&str>,
    mods: Option<&Modifiers>,
) -> String {
    let mut classes = vec![identifier(conventions, block, elem)];
    if let Some(mods) = mods {
        classes.extend(mods.active().into_iter().map(|name| {
            format!("{}{}", conventions.modifier_prefix, to_camel_case(name))
        }));
    }
    classes.join(" ")
}

fn identifier(conventions: &Conventions, block: &str, elem: Option<&str>) -> String {
    match elem {
        Some(elem) => format!("{block}{}{elem}", conventions.element_separator),
        None => block.to_string(),
    }
}

fn check_name(name: &str, empty: AbemError) -> Result<(), AbemError> {
    if name.is_empty() {
        return Err(empty);
    }
    if name.chars().any(char::is_whitespace) {
        return Err(AbemError::InvalidName {
            name: name.to_string(),
            reason: "names must not contain whitespace".to_string(),
        });
    }
    Ok(())
}

/// The unbound builder.
///
/// Holds nothing but the [`Conventions`] it spells names with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Abem {
    conventions: Conventions,
}

impl Abem {
    pub fn new(conventions: Conventions) -> Result<Self, AbemError> {
        conventions.validate()?;
        Ok(Self { conventions })
    }

    pub fn conventions(&self) -> &Conventions {
        &self.conventions
    }

    /// Bind a block name. The name may already carry an element
    /// (`"card__title"`), in which case the block cannot take another one.
    pub fn block(&self, name: impl Into<String>) -> Result<Block, AbemError> {
        let name = name.into();
        check_name(&name, AbemError::EmptyBlock)?;
        Ok(Block {
            conventions: self.conventions.clone(),
            name,
        })
    }

    /// Dispatch one call shape.
    ///
    /// Shapes that carry modifiers finish immediately; the others return
    /// the next stage.
    pub fn call(&self, call: Call) -> Result<Outcome, AbemError> {
        match call {
            Call::Unbound => Ok(Outcome::Unbound(self.clone())),
            Call::Block(block) => self.block(block).map(Outcome::Block),
            Call::BlockModifiers(block, mods) => {
                self.block(block)?.with(mods).map(Outcome::ClassName)
            }
            Call::BlockElement(block, elem) => {
                Ok(Outcome::Element(self.block(block)?.elem(elem)?))
            }
            Call::BlockElementModifiers(block, elem, mods) => {
                self.block(block)?.elem_with(elem, mods).map(Outcome::ClassName)
            }
        }
    }

    /// Space-join the truthy values. See [`join`](crate::join::join).
    pub fn join<I, V>(&self, values: I) -> String
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        crate::join::join(values)
    }
}

/// Bind a block name with the default conventions.
pub fn block(name: impl Into<String>) -> Result<Block, AbemError> {
    Abem::default().block(name)
}

/// A builder bound to a block name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    conventions: Conventions,
    name: String,
}

impl Block {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the bound name already includes an element segment.
    pub fn has_element(&self) -> bool {
        self.name.contains(self.conventions.element_separator.as_str())
    }

    /// The plain identifier.
    pub fn class(&self) -> String {
        self.name.clone()
    }

    /// Finish with modifiers. Active modifier names must not contain
    /// whitespace.
    pub fn with(&self, mods: impl Into<Modifiers>) -> Result<String, AbemError> {
        let mods = mods.into();
        mods.validate()?;
        Ok(class_name(&self.conventions, &self.name, None, Some(&mods)))
    }

    /// Bind an element under this block.
    pub fn elem(&self, elem: impl Into<String>) -> Result<Element, AbemError> {
        let elem = elem.into();
        if self.has_element() {
            return Err(AbemError::NestedElement {
                identifier: self.name.clone(),
                element: elem,
            });
        }
        check_name(&elem, AbemError::EmptyElement)?;
        if elem.contains(self.conventions.element_separator.as_str()) {
            return Err(AbemError::InvalidName {
                reason: format!(
                    "element names must not contain `{}`",
                    self.conventions.element_separator
                ),
                name: elem,
            });
        }
        Ok(Element {
            conventions: self.conventions.clone(),
            block: self.name.clone(),
            elem,
        })
    }

    /// Bind an element and finish with modifiers in one step.
    pub fn elem_with(
        &self,
        elem: impl Into<String>,
        mods: impl Into<Modifiers>,
    ) -> Result<String, AbemError> {
        self.elem(elem)?.with(mods)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A builder bound to a block and an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    conventions: Conventions,
    block: String,
    elem: String,
}

impl Element {
    pub fn block(&self) -> &str {
        &self.block
    }

    pub fn elem(&self) -> &str {
        &self.elem
    }

    /// The identifier, `block__elem`.
    pub fn class(&self) -> String {
        identifier(&self.conventions, &self.block, Some(&self.elem))
    }

    pub fn with(&self, mods: impl Into<Modifiers>) -> Result<String, AbemError> {
        let mods = mods.into();
        mods.validate()?;
        Ok(class_name(
            &self.conventions,
            &self.block,
            Some(&self.elem),
            Some(&mods),
        ))
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.block, self.conventions.element_separator, self.elem
        )
    }
}

/// Result of [`Abem::call`].
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// No arguments: the builder itself.
    Unbound(Abem),
    Block(Block),
    Element(Element),
    ClassName(String),
}

impl Outcome {
    pub fn kind(&self) -> &'static str {
        match self {
            Outcome::Unbound(_) => "unbound",
            Outcome::Block(_) => "block",
            Outcome::Element(_) => "element",
            Outcome::ClassName(_) => "class_name",
        }
    }

    /// The class string this outcome stands for. Bound stages yield their
    /// plain identifier; the unbound builder has none.
    pub fn into_class_name(self) -> Option<String> {
        match self {
            Outcome::Unbound(_) => None,
            Outcome::Block(block) => Some(block.class()),
            Outcome::Element(element) => Some(element.class()),
            Outcome::ClassName(class) => Some(class),
        }
    }
}
