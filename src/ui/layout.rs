use ratatui::layout::Rect;

pub const SEARCH_HEIGHT: u16 = 3;
pub const CAPTION_HEIGHT: u16 = 1;
pub const FOOTER_HEIGHT: u16 = 1;

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub search: Rect,
    pub caption: Rect,
    pub list: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let search_height = area.height.min(SEARCH_HEIGHT);
    let caption_height = CAPTION_HEIGHT.min(area.height.saturating_sub(search_height));
    let footer_height =
        FOOTER_HEIGHT.min(area.height.saturating_sub(search_height + caption_height));
    let list_height = area
        .height
        .saturating_sub(search_height + caption_height + footer_height);

    let row = |y: u16, height: u16| Rect {
        x: area.x,
        y,
        width: area.width,
        height,
    };

    let search = row(area.y, search_height);
    let caption = row(search.y + search_height, caption_height);
    let list = row(caption.y + caption_height, list_height);
    let footer = row(list.y + list_height, footer_height);

    Regions {
        search,
        caption,
        list,
        footer,
    }
}

/// Number of list rows visible for a terminal of `cols` x `rows`.
pub fn list_rows(cols: u16, rows: u16) -> u16 {
    layout_regions(Rect {
        x: 0,
        y: 0,
        width: cols,
        height: rows,
    })
    .list
    .height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_stack_without_gaps() {
        let regions = layout_regions(Rect::new(0, 0, 80, 24));
        assert_eq!(regions.search.height, 3);
        assert_eq!(regions.caption.y, 3);
        assert_eq!(regions.list.y, 4);
        assert_eq!(regions.list.height, 19);
        assert_eq!(regions.footer.y, 23);
        assert_eq!(list_rows(80, 24), 19);
    }

    #[test]
    fn tiny_terminal_gives_list_nothing() {
        let regions = layout_regions(Rect::new(0, 0, 10, 4));
        assert_eq!(regions.search.height, 3);
        assert_eq!(regions.caption.height, 1);
        assert_eq!(regions.list.height, 0);
        assert_eq!(regions.footer.height, 0);
    }
}
