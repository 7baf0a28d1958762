//! Drives a drag through the client projection, persists the resulting
//! update into the SQLite store and checks both sides agree afterwards.

use std::path::Path;

use board_order::{persist, DragEnd, OrderError, Projection};
use kanban_lib::domain::{Card, List, NewCard};
use kanban_lib::repository::{
    init_db, BoardRepository, CardRepository, ListRepository, OrderedRepository,
    RepositoryOrderWriter,
};

struct Board {
    cards: CardRepository,
    lists: ListRepository,
    list_ids: Vec<u32>,
    board_id: u32,
}

async fn board_with_cards(names: &[&str]) -> Board {
    let db = init_db(Path::new(":memory:")).unwrap();
    let boards = BoardRepository::new(db.connection());
    let detail = boards.create_with_default_lists("Sprint", None).await.unwrap();
    let list_ids: Vec<u32> = detail.lists.iter().map(|l| l.list.id).collect();

    let cards = CardRepository::new(db.connection());
    for name in names {
        cards.create(list_ids[0], &NewCard::new(name).unwrap()).await.unwrap();
    }

    Board {
        cards,
        lists: ListRepository::new(db.connection()),
        list_ids,
        board_id: detail.board.id,
    }
}

fn names(cards: &[Card]) -> Vec<String> {
    cards.iter().map(|c| c.name.clone()).collect()
}

#[tokio::test]
async fn card_drag_persists_and_matches_store() {
    let board = board_with_cards(&["A", "B", "C"]).await;
    let todo = board.list_ids[0];

    let mut projection: Projection<Card> = Projection::new();
    projection.load(board.cards.list_by_parent(todo).await.unwrap());

    let c = projection.sequence(todo)[2].id;
    let update = projection
        .apply_move(DragEnd {
            item_id: c,
            source_parent_id: todo,
            source_index: 2,
            dest_parent_id: todo,
            dest_index: 0,
        })
        .expect("move should produce an update");
    assert_eq!(update.sort_key, -1.0);
    assert_eq!(update.new_parent_id, None);

    let writer = RepositoryOrderWriter::<_, Card>::new(&board.cards);
    persist(&writer, update).await.unwrap();

    let stored = board.cards.list_by_parent(todo).await.unwrap();
    assert_eq!(names(&stored), vec!["C", "A", "B"]);
    assert_eq!(names(&stored), names(projection.sequence(todo)));
}

#[tokio::test]
async fn card_drag_across_lists() {
    let board = board_with_cards(&["A", "B"]).await;
    let (todo, doing) = (board.list_ids[0], board.list_ids[1]);

    let mut projection: Projection<Card> = Projection::new();
    projection.load(board.cards.list_by_parent(todo).await.unwrap());

    let a = projection.sequence(todo)[0].id;
    let update = projection
        .apply_move(DragEnd {
            item_id: a,
            source_parent_id: todo,
            source_index: 0,
            dest_parent_id: doing,
            dest_index: 0,
        })
        .unwrap();
    assert_eq!(update.new_parent_id, Some(doing));
    assert_eq!(update.sort_key, 0.0);

    let writer = RepositoryOrderWriter::<_, Card>::new(&board.cards);
    persist(&writer, update).await.unwrap();

    assert_eq!(names(&board.cards.list_by_parent(todo).await.unwrap()), vec!["B"]);
    assert_eq!(names(&board.cards.list_by_parent(doing).await.unwrap()), vec!["A"]);
    assert_eq!(names(projection.sequence(doing)), vec!["A"]);
}

#[tokio::test]
async fn list_drag_persists() {
    let board = board_with_cards(&[]).await;

    let mut projection: Projection<List> = Projection::new();
    projection.load(board.lists.list_by_parent(board.board_id).await.unwrap());

    let done = board.list_ids[2];
    let update = projection
        .apply_move(DragEnd::from_slot(done, board.board_id, 2, board.board_id, 1))
        .unwrap();
    assert_eq!(update.sort_key, 0.5);

    let writer = RepositoryOrderWriter::<_, List>::new(&board.lists);
    persist(&writer, update).await.unwrap();

    let stored: Vec<String> = board
        .lists
        .list_by_parent(board.board_id)
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.name)
        .collect();
    assert_eq!(stored, vec!["To Do", "Done", "Doing"]);
}

#[tokio::test]
async fn deleted_card_surfaces_not_found_and_view_keeps_move() {
    let board = board_with_cards(&["A", "B"]).await;
    let todo = board.list_ids[0];

    let mut projection: Projection<Card> = Projection::new();
    projection.load(board.cards.list_by_parent(todo).await.unwrap());
    let b = projection.sequence(todo)[1].id;

    // Someone else deletes B before our write lands
    board.cards.remove(b).await.unwrap();

    let update = projection
        .apply_move(DragEnd {
            item_id: b,
            source_parent_id: todo,
            source_index: 1,
            dest_parent_id: todo,
            dest_index: 0,
        })
        .unwrap();

    let writer = RepositoryOrderWriter::<_, Card>::new(&board.cards);
    let err = persist(&writer, update).await.unwrap_err();
    assert_eq!(err, OrderError::NotFound(b));

    // No rollback: the optimistic view still shows the move
    assert_eq!(names(projection.sequence(todo)), vec!["B", "A"]);
}

#[tokio::test]
async fn concurrent_stale_midpoints_collide_silently() {
    let board = board_with_cards(&["A", "B", "C", "D"]).await;
    let todo = board.list_ids[0];
    let snapshot = board.cards.list_by_parent(todo).await.unwrap();

    // Two clients load the same snapshot and each drop a different card
    // between A and B.
    let mut first: Projection<Card> = Projection::new();
    first.load(snapshot.clone());
    let mut second: Projection<Card> = Projection::new();
    second.load(snapshot.clone());

    let c = snapshot[2].id;
    let d = snapshot[3].id;
    let first_update = first
        .apply_move(DragEnd::from_slot(c, todo, 2, todo, 1))
        .unwrap();
    let second_update = second
        .apply_move(DragEnd::from_slot(d, todo, 3, todo, 1))
        .unwrap();
    assert_eq!(first_update.sort_key, 0.5);
    assert_eq!(second_update.sort_key, 0.5);

    let writer = RepositoryOrderWriter::<_, Card>::new(&board.cards);
    persist(&writer, first_update).await.unwrap();
    persist(&writer, second_update).await.unwrap();

    let stored = board.cards.list_by_parent(todo).await.unwrap();
    assert_eq!(stored[1].position, stored[2].position);
    // Equal keys read back by id
    assert_eq!(names(&stored), vec!["A", "C", "D", "B"]);
}
