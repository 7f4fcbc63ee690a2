//! NestingDoll - pass-through wrapper with no style or behaviour.

use crate::view::View;

pub fn nesting_doll(child: View) -> View {
    View::block(vec![child])
}
