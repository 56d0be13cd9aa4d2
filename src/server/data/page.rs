use sea_orm::{ConnectionTrait, DbErr, EntityTrait, FromQueryResult, PaginatorTrait, Select};

use crate::model::api::{PageDto, PER_PAGE};

/// Fetch one 1-based page of `select`, which must already be ordered.
///
/// A page past the end yields no items while still reporting the totals.
pub async fn fetch_page<C, E>(
    db: &C,
    select: Select<E>,
    page: u64,
) -> Result<PageDto<E::Model>, DbErr>
where
    C: ConnectionTrait,
    E: EntityTrait,
    E::Model: FromQueryResult + Sized + Send + Sync,
{
    let page = page.max(1);
    let paginator = select.paginate(db, PER_PAGE);

    let totals = paginator.num_items_and_pages().await?;
    // offsets past the last page overflow once bound as i64
    let items = if page > totals.number_of_pages {
        Vec::new()
    } else {
        paginator.fetch_page(page - 1).await?
    };

    Ok(PageDto {
        items,
        page,
        per_page: PER_PAGE,
        total_items: totals.number_of_items,
        total_pages: totals.number_of_pages,
    })
}
