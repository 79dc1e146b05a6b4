use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::catalog::result::MediaServiceResult;
use crate::core::domain::Identifiable;
use crate::core::repository::Repository;
use crate::core::shareit::{ShareError, ShareResult};
use crate::discs::domain::model::DiscEntity;
use crate::discs::dto::DiscDto;
use crate::discs::repository::DiscRepository;

// version conflicts are retried this many times before giving up
const MAX_UPDATE_ATTEMPTS: usize = 3;

pub struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
    disc_repository: Box<dyn DiscRepository>,
}

impl CatalogServiceImpl {
    pub fn new(book_repository: Box<dyn BookRepository>, disc_repository: Box<dyn DiscRepository>) -> Self {
        Self {
            book_repository,
            disc_repository,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: Option<&BookDto>) -> ShareResult<MediaServiceResult> {
        let book = match book {
            Some(book) => book,
            None => {
                tracing::warn!("add_book called without a book");
                return Ok(MediaServiceResult::ImATeapot);
            }
        };
        // the ISBN is checked before completeness
        if !book.check_isbn() {
            return Ok(logged("add_book", book.isbn.as_deref(), MediaServiceResult::InvalidIsbn));
        }
        let entity = match (book.isbn(), book.title(), book.author()) {
            (Some(isbn), Some(title), Some(author)) => BookEntity::new(isbn, title, author),
            _ => return Ok(logged("add_book", book.isbn(), MediaServiceResult::MissingInfo)),
        };
        let res = match self.book_repository.create(&entity).await {
            Ok(_) => MediaServiceResult::Ok,
            Err(ShareError::DuplicateKey { .. }) => MediaServiceResult::DuplicateIsbn,
            Err(err) => return Err(err),
        };
        Ok(logged("add_book", Some(entity.isbn.as_str()), res))
    }

    async fn add_disc(&self, disc: Option<&DiscDto>) -> ShareResult<MediaServiceResult> {
        let disc = match disc {
            Some(disc) => disc,
            None => {
                tracing::warn!("add_disc called without a disc");
                return Ok(MediaServiceResult::ImATeapot);
            }
        };
        let (title, director) = match (disc.title(), disc.director()) {
            (Some(title), Some(director)) => (title, director),
            _ => return Ok(logged("add_disc", disc.barcode(), MediaServiceResult::MissingInfo)),
        };
        let barcode = match disc.barcode() {
            Some(barcode) => barcode,
            None => return Ok(logged("add_disc", None, MediaServiceResult::BarcodeNotFound)),
        };
        let res = match self.disc_repository.create(&DiscEntity::new(barcode, title, director)).await {
            Ok(_) => MediaServiceResult::Ok,
            Err(ShareError::DuplicateKey { .. }) => MediaServiceResult::DuplicateBarcode,
            Err(err) => return Err(err),
        };
        Ok(logged("add_disc", Some(barcode), res))
    }

    async fn get_book(&self, isbn: &str) -> ShareResult<Option<BookDto>> {
        self.book_repository.get(isbn).await.map(|b| b.as_ref().map(BookDto::from))
    }

    async fn get_books(&self) -> ShareResult<Vec<BookDto>> {
        let res = self.book_repository.get_all().await?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn get_disc(&self, barcode: &str) -> ShareResult<Option<DiscDto>> {
        self.disc_repository.get(barcode).await.map(|d| d.as_ref().map(DiscDto::from))
    }

    async fn get_discs(&self) -> ShareResult<Vec<DiscDto>> {
        let res = self.disc_repository.get_all().await?;
        Ok(res.iter().map(DiscDto::from).collect())
    }

    async fn update_book(&self, book: &BookDto) -> ShareResult<(MediaServiceResult, Option<BookDto>)> {
        let isbn = match book.isbn() {
            Some(isbn) if book.check_isbn() => isbn,
            _ => return Ok((logged("update_book", book.isbn.as_deref(), MediaServiceResult::InvalidIsbn), None)),
        };
        if book.title().is_none() && book.author().is_none() {
            return Ok((logged("update_book", Some(isbn), MediaServiceResult::MissingInfo), None));
        }
        let (res, written) = update_with_retry(self.book_repository.as_ref(), isbn, |existing: &mut BookEntity| {
            if let Some(title) = book.title() {
                existing.title = title.to_string();
            }
            if let Some(author) = book.author() {
                existing.author = author.to_string();
            }
        }).await?;
        Ok((logged("update_book", Some(isbn), res), written.as_ref().map(BookDto::from)))
    }

    async fn update_disc(&self, disc: &DiscDto) -> ShareResult<(MediaServiceResult, Option<DiscDto>)> {
        let barcode = match disc.barcode() {
            Some(barcode) => barcode,
            None => return Ok((logged("update_disc", None, MediaServiceResult::BarcodeNotFound), None)),
        };
        if disc.title().is_none() && disc.director().is_none() {
            return Ok((logged("update_disc", Some(barcode), MediaServiceResult::MissingInfo), None));
        }
        let (res, written) = update_with_retry(self.disc_repository.as_ref(), barcode, |existing: &mut DiscEntity| {
            if let Some(title) = disc.title() {
                existing.title = title.to_string();
            }
            if let Some(director) = disc.director() {
                existing.director = director.to_string();
            }
        }).await?;
        Ok((logged("update_disc", Some(barcode), res), written.as_ref().map(DiscDto::from)))
    }
}

// read-modify-write guarded by the entity version, a lost race re-reads the entity
async fn update_with_retry<E, R, F>(repository: &R, key: &str, merge: F) -> ShareResult<(MediaServiceResult, Option<E>)>
    where E: Identifiable + Send, R: Repository<E> + ?Sized, F: Fn(&mut E) + Send + Sync {
    let mut attempt = 0;
    loop {
        attempt += 1;
        let mut entity = match repository.get(key).await? {
            Some(entity) => entity,
            None => return Ok((MediaServiceResult::NotFound, None)),
        };
        merge(&mut entity);
        match repository.update(&entity).await {
            Ok(_) => return Ok((MediaServiceResult::Ok, Some(entity))),
            Err(ShareError::NotFound { .. }) => return Ok((MediaServiceResult::NotFound, None)),
            Err(err) if err.retryable() && attempt < MAX_UPDATE_ATTEMPTS => {
                tracing::warn!(key, attempt, version = entity.version(), "retrying update after {}", err);
            }
            Err(err) => return Err(err),
        }
    }
}

fn logged(operation: &str, key: Option<&str>, res: MediaServiceResult) -> MediaServiceResult {
    if res.is_ok() {
        tracing::info!(operation, key, result = %res, "catalog updated");
    } else {
        tracing::info!(operation, key, result = %res, "catalog request rejected");
    }
    res
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use async_trait::async_trait;
    use crate::books::domain::model::BookEntity;
    use crate::books::dto::BookDto;
    use crate::books::repository::BookRepository;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::domain::service::CatalogServiceImpl;
    use crate::catalog::factory;
    use crate::catalog::result::MediaServiceResult;
    use crate::core::domain::Configuration;
    use crate::core::repository::{Repository, RepositoryStore};
    use crate::core::shareit::{ShareError, ShareResult};
    use crate::discs::dto::DiscDto;
    use crate::discs::factory::create_disc_repository;
    use crate::utils::store::JsonStore;

    const ISBNS: [&str; 6] = [
        "978-0-306-40615-7",
        "978-3-16-148410-0",
        "978-3-86680-192-9",
        "978-1-4028-9462-6",
        "978-0-596-52068-7",
        "978-0-13-110362-7",
    ];

    async fn catalog_svc() -> Arc<dyn CatalogService> {
        factory::create_catalog_service(&Configuration::new("test"), &RepositoryStore::Memory)
            .await.expect("should create catalog service")
    }

    #[tokio::test]
    async fn test_should_add_book() {
        let catalog_svc = catalog_svc().await;

        let book = BookDto::new("test book", "author", ISBNS[0]);
        let res = catalog_svc.add_book(Some(&book)).await.expect("should add book");
        assert_eq!(MediaServiceResult::Ok, res);

        let loaded = catalog_svc.get_book(ISBNS[0]).await.expect("should return book");
        assert_eq!(Some(book), loaded);
        let missing = catalog_svc.get_book("not-a-real-isbn").await.expect("should query book");
        assert_eq!(None, missing);
    }

    #[tokio::test]
    async fn test_should_reject_book_without_author() {
        let catalog_svc = catalog_svc().await;
        let res = catalog_svc.add_book(Some(&BookDto::new("test book", "", ISBNS[0]))).await.expect("should validate");
        assert_eq!(MediaServiceResult::MissingInfo, res);
        let res = catalog_svc.add_book(Some(&BookDto { title: Some("t".into()), author: None, isbn: Some(ISBNS[0].into()) }))
            .await.expect("should validate");
        assert_eq!(MediaServiceResult::MissingInfo, res);
        assert_eq!(None, catalog_svc.get_book(ISBNS[0]).await.expect("should query book"));
    }

    #[tokio::test]
    async fn test_should_check_isbn_before_completeness() {
        let catalog_svc = catalog_svc().await;
        let res = catalog_svc.add_book(Some(&BookDto::new("test book", "", "978-0-306-40615-8"))).await.expect("should validate");
        assert_eq!(MediaServiceResult::InvalidIsbn, res);
        let res = catalog_svc.add_book(Some(&BookDto::new("", "", "9780306406157"))).await.expect("should validate");
        assert_eq!(MediaServiceResult::InvalidIsbn, res);
        let res = catalog_svc.add_book(Some(&BookDto { title: None, author: None, isbn: None })).await.expect("should validate");
        assert_eq!(MediaServiceResult::InvalidIsbn, res);
    }

    #[tokio::test]
    async fn test_should_answer_teapot_without_entity() {
        let catalog_svc = catalog_svc().await;
        assert_eq!(MediaServiceResult::ImATeapot, catalog_svc.add_book(None).await.expect("should answer"));
        assert_eq!(MediaServiceResult::ImATeapot, catalog_svc.add_disc(None).await.expect("should answer"));
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_book() {
        let catalog_svc = catalog_svc().await;
        let book = BookDto::new("test book", "author", ISBNS[1]);
        assert_eq!(MediaServiceResult::Ok, catalog_svc.add_book(Some(&book)).await.expect("should add book"));
        let other = BookDto::new("other book", "other author", ISBNS[1]);
        assert_eq!(MediaServiceResult::DuplicateIsbn, catalog_svc.add_book(Some(&other)).await.expect("should validate"));
        assert_eq!(Some(book), catalog_svc.get_book(ISBNS[1]).await.expect("should return book"));
    }

    #[tokio::test]
    async fn test_should_reject_same_isbn_with_other_hyphens() {
        let catalog_svc = catalog_svc().await;
        let book = BookDto::new("test book", "author", "978-0-306-40615-7");
        assert_eq!(MediaServiceResult::Ok, catalog_svc.add_book(Some(&book)).await.expect("should add book"));
        let other = BookDto::new("other book", "other author", "978-0306406157");
        assert_eq!(MediaServiceResult::DuplicateIsbn, catalog_svc.add_book(Some(&other)).await.expect("should validate"));

        assert_eq!(1, catalog_svc.get_books().await.expect("should return books").len());
        assert_eq!(Some(book.clone()), catalog_svc.get_book("978-0306406157").await.expect("should return book"));
        assert_eq!(Some(book), catalog_svc.get_book("978-0-306-40615-7").await.expect("should return book"));
    }

    #[tokio::test]
    async fn test_should_return_all_books() {
        let catalog_svc = catalog_svc().await;
        let books: Vec<BookDto> = ISBNS.iter().enumerate()
            .map(|(i, isbn)| BookDto::new(format!("title {}", i).as_str(), "author", isbn))
            .collect();
        for book in &books {
            assert_eq!(MediaServiceResult::Ok, catalog_svc.add_book(Some(book)).await.expect("should add book"));
        }
        let loaded = catalog_svc.get_books().await.expect("should return books");
        assert_eq!(books.len(), loaded.len());
        for book in &loaded {
            assert!(books.contains(book));
        }
        assert!(catalog_svc.get_discs().await.expect("should return discs").is_empty());
    }

    #[tokio::test]
    async fn test_should_add_disc() {
        let catalog_svc = catalog_svc().await;
        let disc = DiscDto::new("test disc", "director", "4006680054386");
        assert_eq!(MediaServiceResult::Ok, catalog_svc.add_disc(Some(&disc)).await.expect("should add disc"));
        assert_eq!(Some(disc.clone()), catalog_svc.get_disc("4006680054386").await.expect("should return disc"));
        assert_eq!(vec![disc.clone()], catalog_svc.get_discs().await.expect("should return discs"));
        assert_eq!(MediaServiceResult::DuplicateBarcode, catalog_svc.add_disc(Some(&disc)).await.expect("should validate"));
    }

    #[tokio::test]
    async fn test_should_validate_disc() {
        let catalog_svc = catalog_svc().await;
        let res = catalog_svc.add_disc(Some(&DiscDto::new("test disc", "director", ""))).await.expect("should validate");
        assert_eq!(MediaServiceResult::BarcodeNotFound, res);
        let res = catalog_svc.add_disc(Some(&DiscDto::new("", "director", ""))).await.expect("should validate");
        assert_eq!(MediaServiceResult::MissingInfo, res);
        let res = catalog_svc.add_disc(Some(&DiscDto::new("test disc", "", "4006680054386"))).await.expect("should validate");
        assert_eq!(MediaServiceResult::MissingInfo, res);
        assert!(catalog_svc.get_discs().await.expect("should return discs").is_empty());
    }

    #[tokio::test]
    async fn test_should_update_book() {
        let catalog_svc = catalog_svc().await;
        let book = BookDto::new("test book", "author", ISBNS[2]);
        let _ = catalog_svc.add_book(Some(&book)).await.expect("should add book");

        let change = BookDto { title: Some("new title".into()), author: None, isbn: Some(ISBNS[2].into()) };
        let (res, written) = catalog_svc.update_book(&change).await.expect("should update book");
        assert_eq!(MediaServiceResult::Ok, res);
        assert_eq!(Some(BookDto::new("new title", "author", ISBNS[2])), written);

        let loaded = catalog_svc.get_book(ISBNS[2]).await.expect("should return book");
        assert_eq!(written, loaded);
    }

    #[tokio::test]
    async fn test_should_validate_book_update() {
        let catalog_svc = catalog_svc().await;
        let res = catalog_svc.update_book(&BookDto::new("t", "a", ISBNS[3])).await.expect("should validate");
        assert_eq!((MediaServiceResult::NotFound, None), res);
        let res = catalog_svc.update_book(&BookDto::new("t", "a", "978-0-306-40615-8")).await.expect("should validate");
        assert_eq!((MediaServiceResult::InvalidIsbn, None), res);
        let res = catalog_svc.update_book(&BookDto::new("", "", ISBNS[3])).await.expect("should validate");
        assert_eq!((MediaServiceResult::MissingInfo, None), res);
    }

    #[tokio::test]
    async fn test_should_update_disc() {
        let catalog_svc = catalog_svc().await;
        let _ = catalog_svc.add_disc(Some(&DiscDto::new("test disc", "director", "b-1"))).await.expect("should add disc");

        let change = DiscDto { title: None, director: Some("other".into()), barcode: Some("b-1".into()) };
        let (res, written) = catalog_svc.update_disc(&change).await.expect("should update disc");
        assert_eq!(MediaServiceResult::Ok, res);
        assert_eq!(Some(DiscDto::new("test disc", "other", "b-1")), written);
        assert_eq!(written, catalog_svc.get_disc("b-1").await.expect("should return disc"));

        let res = catalog_svc.update_disc(&DiscDto::new("t", "d", "b-2")).await.expect("should validate");
        assert_eq!((MediaServiceResult::NotFound, None), res);
        let res = catalog_svc.update_disc(&DiscDto::new("t", "d", "")).await.expect("should validate");
        assert_eq!((MediaServiceResult::BarcodeNotFound, None), res);
        let res = catalog_svc.update_disc(&DiscDto::new("", "", "b-1")).await.expect("should validate");
        assert_eq!((MediaServiceResult::MissingInfo, None), res);
        let res = catalog_svc.update_disc(&DiscDto { title: None, director: None, barcode: Some("b-1".into()) })
            .await.expect("should validate");
        assert_eq!((MediaServiceResult::MissingInfo, None), res);
        assert_eq!(Some(DiscDto::new("test disc", "other", "b-1")),
                   catalog_svc.get_disc("b-1").await.expect("should return disc"));
    }

    // loses the first compare-and-swap against a concurrent writer
    struct RacingBookRepository {
        inner: Box<dyn BookRepository>,
        races: AtomicUsize,
    }

    #[async_trait]
    impl Repository<BookEntity> for RacingBookRepository {
        async fn create(&self, entity: &BookEntity) -> ShareResult<usize> {
            self.inner.create(entity).await
        }

        async fn update(&self, entity: &BookEntity) -> ShareResult<usize> {
            let race = self.races.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
            if race.is_ok() {
                let mut concurrent = entity.clone();
                concurrent.author = "concurrent author".to_string();
                self.inner.update(&concurrent).await?;
            }
            self.inner.update(entity).await
        }

        async fn get(&self, id: &str) -> ShareResult<Option<BookEntity>> {
            self.inner.get(id).await
        }

        async fn contains_key(&self, id: &str) -> ShareResult<bool> {
            self.inner.contains_key(id).await
        }

        async fn get_all(&self) -> ShareResult<Vec<BookEntity>> {
            self.inner.get_all().await
        }
    }

    impl BookRepository for RacingBookRepository {}

    fn racing_svc(races: usize) -> CatalogServiceImpl {
        let store = Arc::new(JsonStore::memory());
        let books = RacingBookRepository {
            inner: crate::books::factory::create_book_repository(store.clone()),
            races: AtomicUsize::new(races),
        };
        CatalogServiceImpl::new(Box::new(books), create_disc_repository(store))
    }

    #[tokio::test]
    async fn test_should_retry_update_after_version_conflict() {
        let catalog_svc = racing_svc(1);
        let _ = catalog_svc.add_book(Some(&BookDto::new("test book", "author", ISBNS[4]))).await.expect("should add book");

        let change = BookDto { title: Some("new title".into()), author: None, isbn: Some(ISBNS[4].into()) };
        let (res, written) = catalog_svc.update_book(&change).await.expect("should update book");
        assert_eq!(MediaServiceResult::Ok, res);
        assert_eq!(Some(BookDto::new("new title", "concurrent author", ISBNS[4])), written);
        // the concurrent author survives because the retry re-read the entity
        assert_eq!(Some(BookDto::new("new title", "concurrent author", ISBNS[4])),
                   catalog_svc.get_book(ISBNS[4]).await.expect("should return book"));
    }

    #[tokio::test]
    async fn test_should_give_up_after_repeated_conflicts() {
        let catalog_svc = racing_svc(10);
        let _ = catalog_svc.add_book(Some(&BookDto::new("test book", "author", ISBNS[5]))).await.expect("should add book");

        let res = catalog_svc.update_book(&BookDto::new("new title", "", ISBNS[5])).await;
        assert!(matches!(res, Err(ShareError::CurrentlyUnavailable { retryable: true, .. })));
    }
}
