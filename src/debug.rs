use crate::widgets::Element;

pub fn describe(e: &dyn Element) -> String {
    let r = e.rect();
    let min = e.min_size();
    format!(
        "[{}x{} @ {},{} min {}x{}]",
        r.size.x, r.size.y, r.origin.x, r.origin.y, min.x, min.y
    )
}

pub fn element_type<T: Element>(_e: &T) -> &'static str {
    std::any::type_name::<T>()
        .rsplit_once("::")
        .map(|(_, t)| t)
        .unwrap_or("Element")
}
