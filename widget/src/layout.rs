//! Table-based box layout.
//!
//! Containers are plain `div`s styled with CSS table display values, so the
//! primary unit can take "the remaining space" without flexbox: its cell is
//! sized to 100% along the box's axis and the table layout algorithm shrinks
//! the other cells to fit their content.
//!
//! Ownership of every unit passed in moves into the returned container.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::dom::{Dom, DomError};

/// Which way a box stacks its units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Left to right, one row of cells.
    Horizontal,
    /// Top to bottom, one row per unit.
    Vertical,
}

fn styled<D: Dom>(dom: &mut D, display: &str) -> Result<D::Node, DomError> {
    let node = dom.create_element("div")?;
    dom.set_style(&node, "display", display)?;
    Ok(node)
}

fn wrap_in_cell<D: Dom>(dom: &mut D, content: &D::Node) -> Result<D::Node, DomError> {
    let cell = styled(dom, "table-cell")?;
    dom.append_child(&cell, content)?;
    Ok(cell)
}

/// Lay out `leading`, `primary`, then `trailing` along `axis`.
///
/// The container always holds `leading.len() + trailing.len() + 1` cells
/// (horizontal) or rows (vertical).
pub fn stack<D: Dom>(
    dom: &mut D,
    axis: Axis,
    leading: &[D::Node],
    primary: &D::Node,
    trailing: &[D::Node],
) -> Result<D::Node, DomError> {
    let container = styled(dom, "table")?;
    dom.set_style(&container, "width", "100%")?;
    dom.set_style(&container, "height", "100%")?;

    let units = leading
        .iter()
        .map(|n| (n, false))
        .chain(std::iter::once((primary, true)))
        .chain(trailing.iter().map(|n| (n, false)));

    match axis {
        Axis::Horizontal => {
            let row = styled(dom, "table-row")?;
            for (unit, is_primary) in units {
                let cell = wrap_in_cell(dom, unit)?;
                if is_primary {
                    dom.set_style(&cell, "width", "100%")?;
                }
                dom.append_child(&row, &cell)?;
            }
            dom.append_child(&container, &row)?;
        }
        Axis::Vertical => {
            for (unit, is_primary) in units {
                let row = styled(dom, "table-row")?;
                let cell = wrap_in_cell(dom, unit)?;
                if is_primary {
                    dom.set_style(&cell, "height", "100%")?;
                }
                dom.append_child(&row, &cell)?;
                dom.append_child(&container, &row)?;
            }
        }
    }

    Ok(container)
}

/// Horizontal box: `leading` on the left, `primary` filling the middle, `trailing` on the right.
pub fn h_box<D: Dom>(
    dom: &mut D,
    leading: &[D::Node],
    primary: &D::Node,
    trailing: &[D::Node],
) -> Result<D::Node, DomError> {
    stack(dom, Axis::Horizontal, leading, primary, trailing)
}

/// Vertical box: `leading` on top, `primary` filling the middle, `trailing` at the bottom.
pub fn v_box<D: Dom>(
    dom: &mut D,
    leading: &[D::Node],
    primary: &D::Node,
    trailing: &[D::Node],
) -> Result<D::Node, DomError> {
    stack(dom, Axis::Vertical, leading, primary, trailing)
}

/// Wrap `content` in a bordered inset frame.
pub fn inset<D: Dom>(dom: &mut D, content: &D::Node) -> Result<D::Node, DomError> {
    let frame = dom.create_element("div")?;
    dom.set_style(&frame, "border", "2px inset")?;
    dom.set_style(&frame, "box-sizing", "border-box")?;
    dom.set_style(&frame, "width", "100%")?;
    dom.set_style(&frame, "height", "100%")?;
    dom.append_child(&frame, content)?;
    Ok(frame)
}
